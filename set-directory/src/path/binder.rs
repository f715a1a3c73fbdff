//! Partially-applied path resolution.
//!
//! A [`Binder`] captures an anchor (or the lack of one) and resolves any
//! number of path segments against it. Binders are cheap to clone; clones
//! share the underlying closure, which is what [`Binder::ptr_eq`] compares.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::Result;
use crate::host::Host;
use crate::path::normalize::resolve_from;

type ResolveFn = dyn Fn(&[&Path]) -> Result<PathBuf>;

/// A resolution function bound to an anchor directory.
///
/// # Examples
///
/// ```
/// use set_directory::path::Binder;
/// use std::path::PathBuf;
///
/// let binder = Binder::from_fn(|segments| {
///     let mut path = PathBuf::from("/srv");
///     path.extend(segments);
///     Ok(path)
/// });
/// assert_eq!(binder.join("site").unwrap(), PathBuf::from("/srv/site"));
///
/// let same = binder.clone();
/// assert!(binder.ptr_eq(&same));
/// ```
#[derive(Clone)]
pub struct Binder {
    resolve: Rc<ResolveFn>,
}

impl Binder {
    /// Wrap an arbitrary resolution function.
    ///
    /// This is how callers build replacement binders for the
    /// `set_*` overrides on [`PathSet`](crate::PathSet).
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[&Path]) -> Result<PathBuf> + 'static,
    {
        Self { resolve: Rc::new(f) }
    }

    /// Bind to `anchor`.
    ///
    /// A relative anchor is resolved against the host's working directory
    /// each time the binder is called.
    pub fn anchored(anchor: PathBuf, host: Rc<dyn Host>) -> Self {
        Self::from_fn(move |segments| {
            let mut all = Vec::with_capacity(segments.len() + 1);
            all.push(anchor.as_path());
            all.extend_from_slice(segments);
            resolve_from(|| host.current_dir(), &all)
        })
    }

    /// Bind to the host's working directory, read again on every call.
    pub fn working_dir(host: Rc<dyn Host>) -> Self {
        Self::from_fn(move |segments| resolve_from(|| host.current_dir(), segments))
    }

    /// Resolve `segments` against the bound anchor.
    ///
    /// With no segments the result is the anchor itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and cannot be
    /// read, or if a custom resolution function fails.
    pub fn resolve<I, S>(&self, segments: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let owned: Vec<S> = segments.into_iter().collect();
        let borrowed: Vec<&Path> = owned.iter().map(AsRef::as_ref).collect();
        let resolved = (self.resolve)(&borrowed)?;
        log::trace!("resolved {borrowed:?} to {}", resolved.display());
        Ok(resolved)
    }

    /// Resolve a single path against the bound anchor.
    ///
    /// # Errors
    ///
    /// See [`Binder::resolve`].
    pub fn join(&self, filepath: impl AsRef<Path>) -> Result<PathBuf> {
        self.resolve([filepath])
    }

    /// Return `true` if both binders share the same resolution function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.resolve), Rc::as_ptr(&other.resolve))
    }
}

impl fmt::Debug for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binder")
            .field(&Rc::as_ptr(&self.resolve).cast::<()>())
            .finish()
    }
}
