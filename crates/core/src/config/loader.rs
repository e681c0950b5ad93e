//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed schema (defaults when no file was found)
    pub schema: ConfigSchema,
    /// Path the schema was loaded from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for a project root
    ///
    /// An explicit path wins; otherwise the standard locations under `root`
    /// are searched and defaults are used when nothing is found. An explicit
    /// path that does not exist is an error; a missing discovered file is not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::config_not_found(p));
                }
                Some(p.to_path_buf())
            }
            None => find_config_file(root),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Defaults only, no file
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find a configuration file in the standard locations under `root`
fn find_config_file(root: &Path) -> Option<PathBuf> {
    let candidates = [
        ".gradle-rescue.toml",
        "gradle-rescue.toml",
        ".config/gradle-rescue.toml",
    ];

    for candidate in candidates {
        let path = root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.project.target_sdk, 34);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path(), None).unwrap();
        assert!(config.path.is_none());
        assert_eq!(config.schema.project.ndk_version, "25.1.8937393");
    }

    #[test]
    fn test_load_discovers_dotfile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".gradle-rescue.toml"),
            "[layout]\nstyle = \"classic\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path(), None).unwrap();
        assert!(config.path.is_some());
        assert_eq!(
            config.schema.layout.style,
            crate::config::LayoutStyle::Classic
        );
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(dir.path(), Some(&missing)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradle-rescue.toml");
        fs::write(&path, "[project\nname=").unwrap();
        let err = Config::load(dir.path(), None).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
