//! Template store for templet.
//!
//! Templates are plain files in a single directory: the file name is the
//! template's display name and the file contents are the raw body. The
//! store is read-only to the rest of the crate; users create and edit
//! templates directly in the directory (see `templet open`).

use crate::error::{Result, TempletError};
use std::fs;
use std::path::{Path, PathBuf};

/// Access to the directory of user-authored template files.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The directory containing the template files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the templates directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TempletError::User(format!(
                "failed to create templates directory '{}': {}",
                self.dir.display(),
                e
            ))
        })
    }

    /// List template names, sorted. Subdirectories and hidden files are skipped.
    pub fn names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            TempletError::User(format!(
                "failed to read templates directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                TempletError::User(format!("failed to read templates directory: {}", e))
            })?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with('.') {
                    continue;
                }
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read the raw body of a template by name.
    pub fn body(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| {
            TempletError::User(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
