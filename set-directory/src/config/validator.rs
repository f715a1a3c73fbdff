//! Configuration validation.

use std::path::{Component, Path};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates path set configuration.
///
/// Empty values are always accepted; they select the defaults.
///
/// # Examples
///
/// ```
/// use set_directory::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let escaping = Config { templates: Some("../elsewhere".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&escaping).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - `dest` contains a NUL byte
    /// - `templates` is absolute or climbs out of the home directory
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(dest) = config.dest_dir() {
            Self::validate_no_nul("dest", dest)?;
        }

        if let Some(ref templates) = config.templates {
            if !templates.is_empty() {
                Self::validate_no_nul("templates", templates)?;
                Self::validate_home_relative("templates", templates)?;
            }
        }

        Ok(())
    }

    fn validate_no_nul(field: &str, value: &str) -> Result<()> {
        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot contain NUL bytes".into(),
            });
        }
        Ok(())
    }

    /// The templates directory names a location inside the home directory.
    fn validate_home_relative(field: &str, value: &str) -> Result<()> {
        let path = Path::new(value);
        if path.has_root() || path.is_absolute() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be relative to the home directory, got '{value}'"),
            });
        }

        let mut depth = 0i32;
        for component in path.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::ParentDir => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Must not escape the home directory, got '{value}'"),
                });
            }
        }

        Ok(())
    }
}
