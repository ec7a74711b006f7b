//! Bid Tree - Binary Entry Point
//!
//! Runs the interactive bid menu on stdin/stdout. Logs go to stderr.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bid_tree::config::CliArgs;
use bid_tree::console::Console;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .with_writer(io::stderr)
        .init();

    tracing::debug!(csv_path = %args.csv_path.display(), bid_key = %args.bid_key, "starting console");

    let mut console = Console::new(args.csv_path, args.bid_key);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match console.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console I/O failed");
            ExitCode::FAILURE
        }
    }
}
