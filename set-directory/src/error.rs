//! Error types for the set-directory library.
//!
//! This module provides the error hierarchy for path set construction,
//! configuration loading and template lookup, using `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a set-directory error.
///
/// # Examples
///
/// ```
/// use set_directory::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/tmp"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the set-directory library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument did not have the expected shape.
    ///
    /// Raised when the root directory or a template filename is not a
    /// valid Unicode string.
    #[error("{reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
        /// The message describing what was expected.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDirectoryNotFound,

    /// The current working directory could not be read.
    #[error("cannot get current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build the error raised for a non-string root directory.
    #[must_use]
    pub fn invalid_directory() -> Self {
        Self::InvalidArgument {
            argument: "directory",
            reason: "expected directory to be a string".to_string(),
        }
    }

    /// Build the error raised for a non-string template filename.
    #[must_use]
    pub fn invalid_filename() -> Self {
        Self::InvalidArgument {
            argument: "filename",
            reason: "expected filename to be a string".to_string(),
        }
    }

    /// Check if error was caused by a malformed argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use set_directory::Error;
    ///
    /// assert!(Error::invalid_filename().is_invalid_argument());
    /// assert!(!Error::HomeDirectoryNotFound.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error indicates that something on the host could not be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use set_directory::Error;
    ///
    /// assert!(Error::HomeDirectoryNotFound.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::HomeDirectoryNotFound => true,
            Self::CurrentDirectory(e) | Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
