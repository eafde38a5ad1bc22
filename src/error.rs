//! Error types for the templet CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for templet operations.
///
/// Each variant maps to a specific exit code. `Cancelled` is special: it is
/// never printed, since the user deliberately abandoned the operation.
#[derive(Error, Debug)]
pub enum TempletError {
    /// The template store has no templates to offer.
    #[error("no templates found in '{}'", .0.display())]
    NoTemplates(PathBuf),

    /// The user dismissed a picker or a prompt.
    ///
    /// Cancelling any prompt aborts the whole operation: every pending
    /// variable resolution is dropped and no file is written.
    #[error("operation cancelled")]
    Cancelled,

    /// The final file write failed.
    #[error("failed to write '{}': {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    User(String),
}

impl TempletError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TempletError::NoTemplates(_) => exit_codes::NO_TEMPLATES,
            TempletError::Cancelled => exit_codes::CANCELLED,
            TempletError::WriteFailed { .. } => exit_codes::WRITE_FAILURE,
            TempletError::User(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for templet operations.
pub type Result<T> = std::result::Result<T, TempletError>;
