//! stylecfg: command-line front end for loading, merging, and validating
//! declarative style configuration.
//!
//! This is the main entry point for the `stylecfg` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;
use stylecfg::exit_codes;
use stylecfg::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = init_logging(cli.log_level).and_then(|()| commands::dispatch(cli.command));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
