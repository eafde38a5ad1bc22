//! CLI argument parsing for templet.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Templet: generate files from reusable text templates.
///
/// Templates are plain text files in the templates directory. Placeholders
/// of the form #{name} are substituted when a file is generated:
/// - #{filename}, #{filepath}, #{year}, #{date} resolve from context
/// - any other name prompts for a value
#[derive(Parser, Debug)]
#[command(name = "templet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for templet.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new file from a template.
    ///
    /// Picks a template, asks for a file name, substitutes placeholder
    /// tokens, and writes the result into the target directory.
    New(NewArgs),

    /// List available template names.
    List,

    /// Open the templates directory in the system file manager.
    Open,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Target directory for the generated file (defaults to the current directory).
    pub dir: Option<PathBuf>,

    /// Template to use, skipping the interactive picker.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file name, skipping the interactive prompt.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Workspace root used by the #{filepath} token. Defaults to the
    /// nearest ancestor of the target directory containing a .git entry.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Overwrite the target file if it already exists.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
