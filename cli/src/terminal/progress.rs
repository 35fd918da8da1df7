use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TOTAL_STEPS: u64 = 100;

/// Fixed-rate start-up animation. Purely cosmetic.
pub fn loading(delay: Duration) {
    let pb = ProgressBar::new(TOTAL_STEPS);
    let style = ProgressStyle::with_template("|{bar:62}| {percent:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#-");
    pb.set_style(style);

    for _ in 0..TOTAL_STEPS {
        thread::sleep(delay);
        pb.inc(1);
    }

    pb.finish();
}
