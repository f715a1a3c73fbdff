//! Configuration for path sets.
//!
//! This module provides:
//! - The [`Config`] schema (`dest` and `templates`)
//! - YAML loading via [`ConfigLoader`]
//! - Layer merging via [`ConfigMerger`]
//! - Validation via [`ConfigValidator`]
//! - Programmatic assembly via [`ConfigBuilder`]
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_dest` and friends)
//! 2. A YAML file (via `ConfigBuilder::with_file`)
//! 3. Built-in defaults (working directory and `templates`)
//!
//! # Examples
//!
//! ```
//! use set_directory::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_dest("public")
//!     .with_templates(".scaffold")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.dest_dir(), Some("public"));
//! assert_eq!(config.templates_dir(), ".scaffold");
//! ```

pub mod builder;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
