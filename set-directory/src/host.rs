//! Host environment capability.
//!
//! Everything a [`PathSet`](crate::PathSet) needs from the process and the
//! filesystem goes through the [`Host`] trait: the current working
//! directory, the user's home directory and a file existence check. The
//! production implementation is [`SystemHost`]; tests substitute their own.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Access to process-global and filesystem state.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Return the process's current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Return the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn home_dir(&self) -> Result<PathBuf>;

    /// Check whether `path` exists.
    ///
    /// # Errors
    ///
    /// A path whose lookup fails with `NotFound`, or with `NotADirectory`
    /// because one of its parents is a regular file, does not exist and
    /// yields `Ok(false)`. Any other failure, such as `PermissionDenied` on
    /// a parent directory, is returned as an error.
    fn exists(&self, path: &Path) -> Result<bool>;
}

/// The real host: `std::env`, the `home` crate and the local filesystem.
///
/// # Examples
///
/// ```
/// use set_directory::host::{Host, SystemHost};
///
/// let host = SystemHost;
/// assert!(host.current_dir().unwrap().is_absolute());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(Error::CurrentDirectory)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        home::home_dir().ok_or(Error::HomeDirectoryNotFound)
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        match path.try_exists() {
            Ok(exists) => Ok(exists),
            Err(e) if e.kind() == ErrorKind::NotADirectory => Ok(false),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
