//! Exit code constants for the templet CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unreadable store or config)
//! - 2: No templates available
//! - 3: Operation cancelled by the user
//! - 4: File write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown template, unreadable store or config.
pub const USER_ERROR: i32 = 1;

/// The template store has no templates to offer.
pub const NO_TEMPLATES: i32 = 2;

/// The user dismissed a picker or prompt; nothing was written.
pub const CANCELLED: i32 = 3;

/// The final file write failed.
pub const WRITE_FAILURE: i32 = 4;
