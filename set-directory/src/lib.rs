#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # set-directory
//!
//! Derive a family of related paths from one root directory.
//!
//! A generator or scaffolding tool usually ships templates next to its own
//! code, writes output somewhere relative to where it was run, and lets
//! users override bundled templates from their home directory. This
//! library computes all of those paths from a single root.
//!
//! ## Core Types
//!
//! - [`PathSet`]: the root directory plus the `base`, `home`, `dest` and
//!   `tmpl` binders and the override-aware [`PathSet::file`] lookup
//! - [`Binder`]: a resolution function bound to an anchor directory
//! - [`Config`] and [`ConfigBuilder`]: destination and template options
//! - [`Host`] and [`SystemHost`]: access to the working directory, the
//!   home directory and the filesystem
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use set_directory::{ConfigBuilder, PathSet};
//!
//! let config = ConfigBuilder::new().with_dest("/srv/site").build().unwrap();
//! let paths = PathSet::new("/opt/generator", config).unwrap();
//!
//! assert_eq!(paths.dir(), std::path::Path::new("/opt/generator"));
//! assert_eq!(
//!     paths.base().join("lib").unwrap(),
//!     std::path::PathBuf::from("/opt/generator/lib")
//! );
//! assert_eq!(
//!     paths.dest().join("index.html").unwrap(),
//!     std::path::PathBuf::from("/srv/site/index.html")
//! );
//! assert_eq!(
//!     paths.tmpl().unwrap().join("post.md").unwrap(),
//!     std::path::PathBuf::from("/opt/generator/templates/post.md")
//! );
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use host::{Host, SystemHost};
pub use path::{Binder, PathSet, TEMPLATES_DIR};
