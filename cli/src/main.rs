mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, generate};
use kgzcfg_common::config::{Config, DEFAULT_LOADING_DELAY};
use terminal::{banner, logging, print, progress};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        base_dir: commands.dir.clone(),
        loading_delay: DEFAULT_LOADING_DELAY,
    };

    if !cfg.no_banner && cfg.quiet == 0 {
        banner::show(cfg.loading_delay);
        progress::loading(cfg.loading_delay);
    }

    print::header("zero-config provisioning", cfg.quiet);

    let code: ExitCode = match generate::generate(&commands, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            error!("kgzcfg stopped executing");
            ExitCode::FAILURE
        }
    };

    print::end_of_program();
    code
}
