//! Builder for assembling a validated configuration.

use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from an optional file plus programmatic overrides.
///
/// Values set on the builder take precedence over values read from the
/// file. The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use set_directory::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_dest("dist")
///     .build()
///     .unwrap();
/// assert_eq!(config.dest_dir(), Some("dist"));
/// assert_eq!(config.templates_dir(), "templates");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    overrides: Config,
}

impl ConfigBuilder {
    /// Create a builder with no file and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read base values from a YAML file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the destination directory.
    #[must_use]
    pub fn with_dest(mut self, dest: impl Into<String>) -> Self {
        self.overrides.dest = Some(dest.into());
        self
    }

    /// Set the home subdirectory searched for template overrides.
    #[must_use]
    pub fn with_templates(mut self, templates: impl Into<String>) -> Self {
        self.overrides.templates = Some(templates.into());
        self
    }

    /// Overlay a whole configuration on top of the file values.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        ConfigMerger::merge_into(&mut self.overrides, &config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut layers = Vec::with_capacity(2);
        if let Some(ref path) = self.file {
            layers.push(ConfigLoader::load_file(path)?);
        }
        layers.push(self.overrides);

        let config = ConfigMerger::merge(layers);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
