//! Configuration model for templet.
//!
//! The config file lives at `$TEMPLET_CONFIG` or `<config dir>/templet/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored)
//! and every field has a default, so a missing file behaves like an empty one.

use crate::error::{Result, TempletError};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TEMPLET_CONFIG";

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "templet";

/// Configuration for templet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding template files.
    /// Defaults to `<config dir>/templet/templates`.
    pub templates_dir: Option<PathBuf>,

    /// Command used by `templet open` to show the templates directory
    /// (e.g. "nautilus" or "open -R"). The platform opener is used when unset.
    pub file_manager: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load the config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => serde_yaml::from_str(&text).map_err(|e| {
                TempletError::User(format!("invalid config '{}': {}", path.display(), e))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TempletError::User(format!(
                "failed to read config '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    /// Resolve the templates directory, honoring the config override.
    pub fn templates_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.templates_dir {
            return Ok(dir.clone());
        }
        Ok(app_config_dir()?.join("templates"))
    }
}

/// Path to the config file, honoring `$TEMPLET_CONFIG`.
fn config_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(app_config_dir()?.join("config.yaml"))
}

fn app_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        TempletError::User("cannot determine the user config directory".to_string())
    })?;
    Ok(base.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("nope.yaml")).unwrap();
        assert!(config.templates_dir.is_none());
        assert!(config.file_manager.is_none());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.templates_dir.is_none());
        assert!(config.file_manager.is_none());
    }

    #[test]
    fn fields_are_parsed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            "templates_dir: /home/u/templates\nfile_manager: nautilus\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.templates_dir,
            Some(PathBuf::from("/home/u/templates"))
        );
        assert_eq!(config.file_manager, Some("nautilus".to_string()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "templates_dir: /t\nfuture_option: true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.templates_dir, Some(PathBuf::from("/t")));
    }

    #[test]
    fn malformed_yaml_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "templates_dir: [unclosed").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn configured_templates_dir_wins() {
        let config = Config {
            templates_dir: Some(PathBuf::from("/custom/templates")),
            file_manager: None,
        };
        assert_eq!(
            config.templates_dir().unwrap(),
            PathBuf::from("/custom/templates")
        );
    }

    #[test]
    #[serial]
    fn load_honors_the_config_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "templates_dir: /from/env\n").unwrap();

        // SAFETY: the environment is only touched from this #[serial] test.
        unsafe { env::set_var(CONFIG_ENV, &path) };
        let config = Config::load();
        unsafe { env::remove_var(CONFIG_ENV) };

        assert_eq!(
            config.unwrap().templates_dir,
            Some(PathBuf::from("/from/env"))
        );
    }

    #[test]
    fn default_templates_dir_is_under_app_dir() {
        let config = Config::default();
        let dir = config.templates_dir().unwrap();
        assert!(dir.ends_with("templet/templates"));
    }
}
