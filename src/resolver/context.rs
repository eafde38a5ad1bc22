//! Per-invocation context for built-in token resolution.

use chrono::{DateTime, Local};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Strips the final `.<ext>` suffix of a file name (non-greedy from the end,
/// so `Foo.test.ts` keeps `Foo.test`).
static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^/.]+$").expect("Invalid extension regex"));

/// Everything the resolver needs to compute built-in substitutions for one
/// invocation. Built explicitly by the caller so resolution is a pure
/// function of (body, context) with no ambient lookups, and discarded after
/// the write.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    base_name: String,
    target_dir: PathBuf,
    workspace_root: Option<PathBuf>,
    now: DateTime<Local>,
}

impl ResolutionContext {
    /// Build a context for generating `filename` inside `target_dir`.
    ///
    /// The `filename` extension is stripped here, once, to form the base
    /// name used by the `filename` token.
    pub fn new(
        filename: &str,
        target_dir: PathBuf,
        workspace_root: Option<PathBuf>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            base_name: strip_extension(filename),
            target_dir,
            workspace_root,
            now,
        }
    }

    /// Value of the `filename` token.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Value of the `filepath` token: the target directory with the
    /// `<root>/` prefix removed when it starts with one, otherwise the
    /// target directory unchanged.
    pub fn relative_target_dir(&self) -> String {
        let target = self.target_dir.to_string_lossy();
        if let Some(root) = &self.workspace_root {
            let prefix = format!("{}/", root.to_string_lossy());
            if let Some(rest) = target.strip_prefix(prefix.as_str()) {
                return rest.to_string();
            }
        }
        target.into_owned()
    }

    /// Value of the `year` token: 4-digit year.
    pub fn year(&self) -> String {
        self.now.format("%Y").to_string()
    }

    /// Value of the `date` token: `D MMM YYYY`, e.g. `7 Mar 2024`.
    pub fn date(&self) -> String {
        self.now.format("%-d %b %Y").to_string()
    }
}

fn strip_extension(filename: &str) -> String {
    EXTENSION_REGEX.replace(filename, "").into_owned()
}
