use clap::Parser;
use ytd_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging(cli.global.verbose) {
        logging::init_logging_stderr(cli.global.verbose);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    // Dispatch; the returned code is the downloader's own when it ran.
    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("ytd error: {:#}", err);
            std::process::exit(1);
        }
    }
}
