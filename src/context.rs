//! Workspace context resolution for templet.
//!
//! The `#{filepath}` token renders the target directory relative to a
//! workspace root, the way an editor scopes paths to the open project.
//! The root is discovered by walking up from the target directory until a
//! `.git` entry is found; `--root` overrides discovery, and the root may
//! be absent (e.g. generating a file outside any repository).

use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` (inclusive) containing a `.git` entry.
///
/// Returns `None` when no ancestor up to the filesystem root qualifies.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        if d.join(".git").exists() {
            return Some(d.to_path_buf());
        }
        dir = d.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_root_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        let nested = root.join("src").join("components");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_workspace_root(&nested), Some(root.to_path_buf()));
    }

    #[test]
    fn finds_root_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();

        assert_eq!(find_workspace_root(root), Some(root.to_path_buf()));
    }

    #[test]
    fn absent_when_no_git_entry() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("plain");
        fs::create_dir(&nested).unwrap();

        // The tempdir itself has no .git; ancestors outside it might, so
        // only assert when discovery stays within the tempdir.
        if let Some(found) = find_workspace_root(&nested) {
            assert!(!found.starts_with(temp_dir.path()));
        }
    }

    #[test]
    fn git_file_counts_as_root() {
        // Worktrees and submodules use a .git file rather than a directory.
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".git"), "gitdir: /elsewhere").unwrap();

        assert_eq!(find_workspace_root(root), Some(root.to_path_buf()));
    }
}
