//! Common test utilities for integration tests.
//!
//! This module provides host fixtures backed by the real filesystem and a
//! guard for tests that change the process working directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use set_directory::{Host, Result, SystemHost};
use tempfile::TempDir;

/// A host with the real working directory and filesystem but a temporary
/// home directory, so tests can plant template overrides without touching
/// the user's real home.
pub struct TempHome {
    home: TempDir,
}

#[allow(dead_code)]
impl TempHome {
    /// Creates an empty temporary home directory.
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Path of the temporary home directory.
    pub fn path(&self) -> &Path {
        self.home.path()
    }

    /// Writes `contents` to `relative` under the home directory, creating
    /// parent directories as needed.
    pub fn plant(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    /// Wraps this fixture for use as a `PathSet` host.
    pub fn into_host(self) -> (Rc<dyn Host>, PathBuf) {
        let path = self.home.path().to_path_buf();
        (Rc::new(self), path)
    }
}

impl Host for TempHome {
    fn current_dir(&self) -> Result<PathBuf> {
        SystemHost.current_dir()
    }

    fn home_dir(&self) -> Result<PathBuf> {
        Ok(self.home.path().to_path_buf())
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        SystemHost.exists(path)
    }
}

/// RAII guard that changes the working directory and restores it on drop.
///
/// Note: the working directory is process-global. Tests using this guard
/// must be marked `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    previous: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    pub fn change_to(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
