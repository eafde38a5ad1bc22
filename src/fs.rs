//! Filesystem operations for templet.
//!
//! The generated file is written through a temporary file in the target
//! directory followed by a rename, so an interrupted or failed write never
//! leaves a partial file at the target path.

use crate::error::{Result, TempletError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `contents` to a new file at `path`.
///
/// Refuses to overwrite an existing file unless `force` is set. Parent
/// directories are created as needed.
pub fn write_new_file(path: &Path, contents: &str, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Err(TempletError::User(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| write_failed(path, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, contents.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_failed(path, e)
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_failed(path, e)
    })
}

/// Open `dir` in a file manager.
///
/// `override_cmd` comes from the `file_manager` config field and is parsed
/// shell-style, so values like `open -R` work. Without it the platform
/// opener is used.
pub fn open_in_file_manager(dir: &Path, override_cmd: Option<&str>) -> Result<()> {
    let argv: Vec<String> = match override_cmd {
        Some(cmd) => shell_words::split(cmd).map_err(|e| {
            TempletError::User(format!("invalid file_manager command '{}': {}", cmd, e))
        })?,
        None => vec![default_opener().to_string()],
    };
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| TempletError::User("file_manager command is empty".to_string()))?;

    Command::new(program)
        .args(args)
        .arg(dir)
        .spawn()
        .map_err(|e| TempletError::User(format!("failed to launch '{}': {}", program, e)))?;
    Ok(())
}

fn write_failed(path: &Path, source: std::io::Error) -> TempletError {
    TempletError::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Temporary file path in the same directory as `target`: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TempletError::User(format!("invalid file path '{}'", target.display())))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(target_os = "macos")]
fn default_opener() -> &'static str {
    "open"
}

#[cfg(target_os = "windows")]
fn default_opener() -> &'static str {
    "explorer"
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_opener() -> &'static str {
    "xdg-open"
}
