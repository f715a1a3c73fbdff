//! The derived path set.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::{Host, SystemHost};
use crate::path::binder::Binder;
use crate::path::normalize::resolve_from;

/// Name of the bundled templates directory under the root directory, and
/// the default home subdirectory searched for overrides.
pub const TEMPLATES_DIR: &str = "templates";

/// Paths derived from one root directory.
///
/// The root directory is resolved to an absolute path once, when the set is
/// created. The `base`, `home`, `dest` and `tmpl` binders are computed on
/// first access and cached; each can be replaced with a `set_*` method.
///
/// # Examples
///
/// ```no_run
/// use set_directory::{Config, PathSet};
///
/// let paths = PathSet::new("generator", Config::default()).unwrap();
///
/// // <cwd>/generator/bar
/// let bar = paths.base().join("bar").unwrap();
///
/// // ~/templates/post.md if it exists, otherwise <cwd>/generator/templates/post.md
/// let post = paths.file("post.md").unwrap();
/// ```
pub struct PathSet {
    dir: PathBuf,
    config: Config,
    host: Rc<dyn Host>,
    base: OnceCell<Binder>,
    home: OnceCell<Binder>,
    dest: OnceCell<Binder>,
    tmpl: OnceCell<Binder>,
}

impl PathSet {
    /// Create a path set rooted at `dir` using the real host environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `dir` is not valid Unicode, or
    /// a host error if `dir` is relative and the working directory cannot
    /// be read.
    pub fn new(dir: impl AsRef<Path>, config: Config) -> Result<Self> {
        Self::with_host(dir, config, Rc::new(SystemHost))
    }

    /// Create a path set rooted at `dir` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`PathSet::new`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(dir, Config::default())
    }

    /// Create a path set that queries `host` for process and filesystem state.
    ///
    /// # Errors
    ///
    /// See [`PathSet::new`].
    pub fn with_host(dir: impl AsRef<Path>, config: Config, host: Rc<dyn Host>) -> Result<Self> {
        let input = dir.as_ref();
        if input.to_str().is_none() {
            return Err(Error::invalid_directory());
        }

        let dir = resolve_from(|| host.current_dir(), &[input])?;
        log::debug!("path set rooted at {}", dir.display());

        Ok(Self {
            dir,
            config,
            host,
            base: OnceCell::new(),
            home: OnceCell::new(),
            dest: OnceCell::new(),
            tmpl: OnceCell::new(),
        })
    }

    /// The absolute root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The configuration this set was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Binder resolving paths against the root directory.
    pub fn base(&self) -> &Binder {
        self.base.get_or_init(|| {
            log::debug!("computing base binder");
            Binder::anchored(self.dir.clone(), Rc::clone(&self.host))
        })
    }

    /// Binder resolving paths against the user's home directory.
    ///
    /// The home directory is looked up on first access only.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn home(&self) -> Result<&Binder> {
        get_or_try_init(&self.home, "home", || {
            let home = self.host.home_dir()?;
            Ok(Binder::anchored(home, Rc::clone(&self.host)))
        })
    }

    /// Binder resolving paths against the destination directory.
    ///
    /// With a configured `dest` the binder is anchored there. Otherwise it
    /// reads the working directory again on every call, so it follows the
    /// process if it changes directory.
    pub fn dest(&self) -> &Binder {
        self.dest.get_or_init(|| {
            let host = Rc::clone(&self.host);
            if let Some(dest) = self.config.dest_dir() {
                log::debug!("computing dest binder anchored at {dest}");
                Binder::anchored(PathBuf::from(dest), host)
            } else {
                log::debug!("computing dest binder anchored at the working directory");
                Binder::working_dir(host)
            }
        })
    }

    /// Binder resolving paths against the bundled templates directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the `base` binder fails to resolve the templates
    /// directory.
    pub fn tmpl(&self) -> Result<&Binder> {
        get_or_try_init(&self.tmpl, "tmpl", || {
            let templates = self.base().join(TEMPLATES_DIR)?;
            Ok(Binder::anchored(templates, Rc::clone(&self.host)))
        })
    }

    /// Replace the `base` binder.
    pub fn set_base(&mut self, binder: Binder) {
        log::debug!("overriding base binder");
        self.base = OnceCell::from(binder);
    }

    /// Replace the `home` binder.
    pub fn set_home(&mut self, binder: Binder) {
        log::debug!("overriding home binder");
        self.home = OnceCell::from(binder);
    }

    /// Replace the `dest` binder.
    pub fn set_dest(&mut self, binder: Binder) {
        log::debug!("overriding dest binder");
        self.dest = OnceCell::from(binder);
    }

    /// Replace the `tmpl` binder.
    pub fn set_tmpl(&mut self, binder: Binder) {
        log::debug!("overriding tmpl binder");
        self.tmpl = OnceCell::from(binder);
    }

    /// Locate a template, preferring the user's copy.
    ///
    /// Looks for `filename` under the configured templates subdirectory of
    /// the home directory and returns that path if it exists. Otherwise
    /// returns the path of `filename` in the bundled templates directory,
    /// whether or not it exists. Existence is checked on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `filename` is not valid
    /// Unicode, or a host error if the home directory cannot be determined
    /// or existence cannot be checked.
    pub fn file(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let filename = filename.as_ref();
        if filename.to_str().is_none() {
            return Err(Error::invalid_filename());
        }

        let templates = self.config.templates_dir();
        let candidate = self.home()?.resolve([Path::new(templates), filename])?;
        if self.host.exists(&candidate)? {
            log::debug!("using template override {}", candidate.display());
            return Ok(candidate);
        }

        let bundled = self.tmpl()?.join(filename)?;
        log::debug!(
            "no override at {}, using {}",
            candidate.display(),
            bundled.display()
        );
        Ok(bundled)
    }
}

impl fmt::Debug for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSet")
            .field("dir", &self.dir)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn get_or_try_init<'a, F>(cell: &'a OnceCell<Binder>, name: &str, init: F) -> Result<&'a Binder>
where
    F: FnOnce() -> Result<Binder>,
{
    if let Some(binder) = cell.get() {
        return Ok(binder);
    }
    let binder = init()?;
    log::debug!("computed {name} binder");
    Ok(cell.get_or_init(|| binder))
}
