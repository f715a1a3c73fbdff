//! Configuration schema definitions.
//!
//! This module defines the options a [`PathSet`](crate::PathSet) accepts:
//! where destination paths are anchored and which subdirectory of the home
//! directory holds user template overrides.

use serde::{Deserialize, Serialize};

use crate::path::TEMPLATES_DIR;

/// Options for a path set.
///
/// Both fields are optional. An empty string behaves exactly like an
/// absent value.
///
/// # Examples
///
/// ```
/// use set_directory::config::Config;
///
/// let config = Config {
///     dest: Some("dist".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.dest_dir(), Some("dist"));
/// assert_eq!(config.templates_dir(), "templates");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory destination paths are resolved against.
    ///
    /// Relative values are resolved against the working directory at the
    /// time each destination path is computed. Defaults to the working
    /// directory itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,

    /// Subdirectory of the home directory searched for template overrides.
    ///
    /// Defaults to `templates`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<String>,
}

impl Config {
    /// The configured destination directory, if present and non-empty.
    #[must_use]
    pub fn dest_dir(&self) -> Option<&str> {
        self.dest.as_deref().filter(|d| !d.is_empty())
    }

    /// The home subdirectory holding template overrides.
    ///
    /// Falls back to `templates` when unset or empty.
    #[must_use]
    pub fn templates_dir(&self) -> &str {
        self.templates
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(TEMPLATES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.dest.is_none());
        assert!(config.templates.is_none());
        assert_eq!(config.dest_dir(), None);
        assert_eq!(config.templates_dir(), "templates");
    }

    #[test]
    fn test_empty_strings_mean_default() {
        let config = Config {
            dest: Some(String::new()),
            templates: Some(String::new()),
        };
        assert_eq!(config.dest_dir(), None);
        assert_eq!(config.templates_dir(), "templates");
    }

    #[test]
    fn test_configured_values() {
        let config = Config {
            dest: Some("out".to_string()),
            templates: Some(".generator/templates".to_string()),
        };
        assert_eq!(config.dest_dir(), Some("out"));
        assert_eq!(config.templates_dir(), ".generator/templates");
    }

    #[test]
    fn test_config_yaml() {
        let yaml = "dest: build\ntemplates: my-templates\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dest.as_deref(), Some("build"));
        assert_eq!(config.templates.as_deref(), Some("my-templates"));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = "dest: build\nunknown: true\n";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_non_string_dest() {
        let yaml = "dest: [1, 2]\n";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let config = Config {
            templates: Some("tpl".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("dest"));
        assert!(yaml.contains("templates: tpl"));
    }
}
