//! The placeholder resolution engine.
//!
//! One scan collects the distinct identifiers in first-occurrence order.
//! Built-ins resolve from the context; every other identifier prompts the
//! user exactly once, so a repeated unknown identifier never produces a
//! second prompt. All resolved values are then applied to the original
//! body in a single combined substitution pass.

use super::context::ResolutionContext;
use super::tokens::{scan_identifiers, substitute};
use crate::error::{Result, TempletError};
use crate::ui::Prompter;
use std::collections::HashMap;

/// Resolve every `#{identifier}` token in `body` and return the final text.
///
/// Cancelling any variable prompt aborts the whole resolution with
/// [`TempletError::Cancelled`]; no partially substituted text escapes.
/// The resolver issues prompts but never touches the filesystem.
pub fn resolve(body: &str, ctx: &ResolutionContext, prompter: &mut dyn Prompter) -> Result<String> {
    let mut resolutions: HashMap<String, String> = HashMap::new();

    for identifier in scan_identifiers(body) {
        let value = match builtin_value(&identifier, ctx) {
            Some(value) => value,
            None => prompt_value(&identifier, prompter)?,
        };
        resolutions.insert(identifier, value);
    }

    Ok(substitute(body, &resolutions))
}

/// Value for a built-in identifier; `None` means it is user-resolvable.
/// Matching is case-sensitive and exact.
fn builtin_value(identifier: &str, ctx: &ResolutionContext) -> Option<String> {
    match identifier {
        "filename" => Some(ctx.base_name().to_string()),
        "filepath" => Some(ctx.relative_target_dir()),
        "year" => Some(ctx.year()),
        "date" => Some(ctx.date()),
        _ => None,
    }
}

fn prompt_value(identifier: &str, prompter: &mut dyn Prompter) -> Result<String> {
    let label = format!("Please enter the desired value for \"{}\"", identifier);
    match prompter.input(&label, None)? {
        Some(value) => Ok(value),
        None => Err(TempletError::Cancelled),
    }
}
