//! Configuration merging.
//!
//! File-based configuration is overlaid by values set programmatically.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use set_directory::config::{Config, ConfigMerger};
///
/// let low = Config { dest: Some("low".to_string()), ..Default::default() };
/// let high = Config { dest: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dest, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: Vec<Config>) -> Config {
        let mut result = Config::default();
        for layer in &layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target (source overwrites target if Some).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.dest.is_some() {
            target.dest.clone_from(&source.dest);
        }

        if source.templates.is_some() {
            target.templates.clone_from(&source.templates);
        }
    }
}
