//! Path resolution primitive.
//!
//! This module turns a sequence of path segments into one absolute,
//! normalized path:
//! - Empty segments are ignored
//! - An absolute segment discards every segment to its left
//! - Relative results are anchored at the current working directory
//! - `.` components are dropped and `..` components pop, clamping at the root
//! - Redundant separators collapse

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Resolve `.` and `..` components in a path.
///
/// A `..` that would climb above the root is dropped, so `/..` resolves to
/// `/`.
///
/// # Examples
///
/// ```
/// use set_directory::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// // Resolves . and ..
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// // Clamps at the root
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !result.has_root() {
                    result.push(component);
                }
            }
        }
    }

    result
}

/// Resolve `segments` into an absolute path.
///
/// `cwd` is only called when none of the segments is absolute, so a
/// resolution anchored at an absolute directory never touches the process
/// working directory.
///
/// # Errors
///
/// Returns whatever error `cwd` returns.
///
/// # Examples
///
/// ```
/// use set_directory::path::normalize::resolve_from;
/// use std::path::{Path, PathBuf};
///
/// let cwd = || Ok(PathBuf::from("/work"));
///
/// let resolved = resolve_from(cwd, &[Path::new("foo"), Path::new("bar")]).unwrap();
/// assert_eq!(resolved, PathBuf::from("/work/foo/bar"));
///
/// // An absolute segment wins over everything before it
/// let resolved = resolve_from(cwd, &[Path::new("foo"), Path::new("/etc"), Path::new("x")]).unwrap();
/// assert_eq!(resolved, PathBuf::from("/etc/x"));
/// ```
pub fn resolve_from<F>(cwd: F, segments: &[&Path]) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let mut joined = PathBuf::new();
    for segment in segments {
        if segment.as_os_str().is_empty() {
            continue;
        }
        // Pushing an absolute path replaces what came before it
        joined.push(segment);
    }

    let absolute = if joined.is_absolute() {
        joined
    } else {
        cwd()?.join(joined)
    };

    Ok(resolve_components(&absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn fixed_cwd() -> Result<PathBuf> {
        Ok(PathBuf::from("/work/dir"))
    }

    fn resolve(segments: &[&str]) -> PathBuf {
        let paths: Vec<&Path> = segments.iter().map(Path::new).collect();
        resolve_from(fixed_cwd, &paths).unwrap()
    }

    #[test]
    fn test_resolve_components_simple() {
        let resolved = resolve_components(Path::new("/a/./b/../c"));
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_resolve_components_multiple_parent() {
        let resolved = resolve_components(Path::new("/a/b/../../c"));
        assert_eq!(resolved, PathBuf::from("/c"));
    }

    #[test]
    fn test_resolve_components_root_only() {
        assert_eq!(resolve_components(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_clamps_at_root() {
        assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_collapses_separators() {
        let resolved = resolve_components(Path::new("/a//b///c/"));
        assert_eq!(resolved, PathBuf::from("/a/b/c"));
    }

    #[test]
    fn test_resolve_no_segments_is_cwd() {
        assert_eq!(resolve(&[]), PathBuf::from("/work/dir"));
    }

    #[test]
    fn test_resolve_relative_segments() {
        assert_eq!(resolve(&["foo", "bar"]), PathBuf::from("/work/dir/foo/bar"));
    }

    #[test]
    fn test_resolve_skips_empty_segments() {
        assert_eq!(resolve(&["", "foo", "", "", "bar", ""]), resolve(&["foo", "bar"]));
    }

    #[test]
    fn test_resolve_dot_segments() {
        assert_eq!(resolve(&[".", "foo", "./bar", "."]), PathBuf::from("/work/dir/foo/bar"));
    }

    #[test]
    fn test_resolve_parent_segments() {
        assert_eq!(resolve(&["..", "other"]), PathBuf::from("/work/other"));
    }

    #[test]
    fn test_resolve_absolute_short_circuits() {
        assert_eq!(resolve(&["foo", "/abs", "bar"]), PathBuf::from("/abs/bar"));
        assert_eq!(resolve(&["/first", "/second"]), PathBuf::from("/second"));
    }

    #[test]
    fn test_resolve_absolute_does_not_read_cwd() {
        let resolved = resolve_from(
            || Err(Error::HomeDirectoryNotFound),
            &[Path::new("/anchored"), Path::new("x")],
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/anchored/x"));
    }

    #[test]
    fn test_resolve_propagates_cwd_error() {
        let result = resolve_from(
            || Err(Error::HomeDirectoryNotFound),
            &[Path::new("relative")],
        );
        assert!(result.is_err());
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy for segments mixing names, dots and empty strings
        fn segment_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(String::new()),
                Just(".".to_string()),
                Just("..".to_string()),
                "[a-zA-Z0-9_-]{1,10}",
                "[a-zA-Z0-9_-]{1,10}/[a-zA-Z0-9_-]{1,10}",
            ]
        }

        proptest! {
            /// Resolution always produces absolute paths
            #[test]
            fn resolve_always_absolute(segs in prop::collection::vec(segment_strategy(), 0..6)) {
                let resolved = resolve(&segs.iter().map(String::as_str).collect::<Vec<_>>());
                prop_assert!(resolved.is_absolute());
            }

            /// Resolution is idempotent
            #[test]
            fn resolve_idempotent(segs in prop::collection::vec(segment_strategy(), 0..6)) {
                let once = resolve(&segs.iter().map(String::as_str).collect::<Vec<_>>());
                let twice = resolve_from(fixed_cwd, &[once.as_path()]).unwrap();
                prop_assert_eq!(once, twice);
            }

            /// Resolved paths contain no . or .. components
            #[test]
            fn resolve_no_dot_components(segs in prop::collection::vec(segment_strategy(), 0..6)) {
                let resolved = resolve(&segs.iter().map(String::as_str).collect::<Vec<_>>());
                for component in resolved.components() {
                    prop_assert_ne!(component, Component::CurDir);
                    prop_assert_ne!(component, Component::ParentDir);
                }
            }
        }
    }
}
