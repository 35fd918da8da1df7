use std::path::PathBuf;
use std::time::Duration;

/// Per-step delay of the start-up animation.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(10);

pub struct Config {
    /// Skips the logo and the start-up animation.
    pub no_banner: bool,

    /// Verbosity reduction. `1` hides the cosmetic output, `2` also hides
    /// the per-device assignment listing.
    pub quiet: u8,

    /// Directory holding the `kgzcfg/` tree (list files and site folders).
    pub base_dir: PathBuf,

    /// Delay between animation steps.
    pub loading_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            base_dir: PathBuf::from("."),
            loading_delay: DEFAULT_LOADING_DELAY,
        }
    }
}
