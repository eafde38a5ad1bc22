//! Command implementations for templet.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod list;
mod new;
mod open;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(args),
        Command::List => list::cmd_list(),
        Command::Open => open::cmd_open(),
    }
}
