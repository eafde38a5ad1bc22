//! Templet: generate files from reusable text templates.
//!
//! This is the main entry point for the `templet` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod resolver;
pub mod store;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use cli::Cli;
use error::TempletError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Cancellation is silent: the user chose to abandon the
            // operation and nothing was written.
            if !matches!(err, TempletError::Cancelled) {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
