//! Path resolution and the derived path set.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! Resolution turns a list of segments into one absolute path the way a
//! POSIX shell would read them left to right:
//! - Empty segments are ignored
//! - An absolute segment discards everything before it
//! - Relative results are anchored at the current working directory
//! - `.` and `..` components are resolved
//!
//! ## Binders
//!
//! A [`Binder`] is a resolution function with its anchor already applied.
//! [`PathSet`] hands out one binder per anchor (`base`, `home`, `dest`,
//! `tmpl`), computing each on first use and caching it afterwards.
//!
//! ## Template overrides
//!
//! [`PathSet::file`] looks for a template in the user's home directory
//! first and falls back to the templates bundled under the root directory.
//!
//! # Examples
//!
//! ```
//! use set_directory::path::normalize::resolve_components;
//! use std::path::Path;
//!
//! let resolved = resolve_components(Path::new("/srv/./app/../templates"));
//! assert_eq!(resolved, Path::new("/srv/templates"));
//! ```

pub mod binder;
pub mod normalize;
mod set;

// Re-export key types
pub use binder::Binder;
pub use set::{PathSet, TEMPLATES_DIR};
