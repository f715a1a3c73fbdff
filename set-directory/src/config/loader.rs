//! Configuration file loading.
//!
//! Path set options can be kept in a small YAML file next to the project
//! that owns the templates. This module reads and parses such files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Loads configuration from YAML sources.
///
/// # Examples
///
/// ```
/// use set_directory::config::ConfigLoader;
///
/// let config = ConfigLoader::load_str("dest: dist\n", "inline").unwrap();
/// assert_eq!(config.dest_dir(), Some("dist"));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let config = Self::load_str(&contents, &path.display().to_string())?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// `source` names where the text came from and is reported in errors.
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the YAML is invalid.
    pub fn load_str(contents: &str, source: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(contents).map_err(|e| Error::Validation {
            field: source.to_string(),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "dest: [unclosed").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        match result {
            Err(Error::Validation { field, message }) => {
                assert!(field.contains("bad.yaml"));
                assert!(message.contains("Invalid YAML"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("paths.yaml");
        fs::write(&config_path, "dest: out\ntemplates: tpl\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.dest_dir(), Some("out"));
        assert_eq!(config.templates_dir(), "tpl");
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_str_unknown_field() {
        let result = ConfigLoader::load_str("destination: out\n", "inline");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
