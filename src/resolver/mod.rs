//! Template resolution: turning a raw template body into final text.
//!
//! A template body contains placeholder tokens of the form `#{identifier}`.
//! Four identifiers are built in and resolve from the per-invocation
//! [`ResolutionContext`]:
//!
//! - `filename` - the chosen file name with its final extension stripped
//! - `filepath` - the target directory relative to the workspace root
//! - `year` - the current year, 4 digits
//! - `date` - the current date as `7 Mar 2024`
//!
//! Every other identifier is resolved by prompting the user once per
//! distinct name. Cancelling any prompt cancels the whole resolution:
//! the caller gets `TempletError::Cancelled` and writes nothing.
//!
//! Tokens are flat: no nesting, no defaults, no escaping. Substituted
//! values are never re-scanned for tokens.

mod context;
mod engine;
mod tokens;


pub use context::ResolutionContext;
pub use engine::resolve;
pub use tokens::scan_identifiers;
