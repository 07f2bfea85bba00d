//! Navigable locations built on top of a resolver.
//!
//! A [`Location`] pairs an absolute path with the resolver that produced it
//! and the working directory it was created from. Navigation never touches
//! the filesystem: a location may name a directory that does not exist.

use std::env;
use std::fmt;

use crate::error::{Error, Result};
use crate::path::resolver::PathResolver;

/// An absolute path plus the context needed to navigate from it.
///
/// # Examples
///
/// ```
/// use pathalg::{Location, PathResolver, Platform};
///
/// let resolver = PathResolver::new(Platform::Unix);
/// let project = Location::new(resolver, "/home/dev", "projects/app");
/// assert_eq!(project.as_str(), "/home/dev/projects/app");
///
/// let src = project.go("./src/../lib");
/// assert_eq!(src.as_str(), "/home/dev/projects/app/lib");
/// assert_eq!(src.relative_path(false), "./projects/app/lib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    resolver: PathResolver,
    working_dir: String,
    path: String,
}

impl Location {
    /// Create a location for `path`, resolving it against `working_dir`.
    ///
    /// An absolute `path` is taken verbatim; a relative one is resolved and
    /// normalized.
    #[must_use]
    pub fn new(resolver: PathResolver, working_dir: impl Into<String>, path: &str) -> Self {
        let working_dir = working_dir.into();
        let path = if resolver.is_absolute_path(path) {
            path.to_string()
        } else {
            resolver.resolve(&working_dir, path)
        };

        Self {
            resolver,
            working_dir,
            path,
        }
    }

    /// A location for the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or is not
    /// valid UTF-8.
    pub fn current(resolver: PathResolver) -> Result<Self> {
        let working_dir = current_dir()?;
        Ok(Self {
            resolver,
            path: working_dir.clone(),
            working_dir,
        })
    }

    /// A location for `path` relative to the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or is not
    /// valid UTF-8.
    pub fn from_current_dir(resolver: PathResolver, path: &str) -> Result<Self> {
        Ok(Self::new(resolver, current_dir()?, path))
    }

    /// Navigate to `path`, treating this location as a directory.
    #[must_use]
    pub fn go(&self, path: &str) -> Self {
        self.with_path(self.resolver.resolve(&self.path, path))
    }

    /// Navigate to `path` from the directory containing this location.
    ///
    /// Use this when the location names a file rather than a directory.
    #[must_use]
    pub fn go_from_parent(&self, path: &str) -> Self {
        self.parent().go(path)
    }

    /// The directory containing this location.
    ///
    /// The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        self.with_path(self.resolver.resolve(&self.path, ".."))
    }

    /// Relative path from the working directory to this location.
    #[must_use]
    pub fn relative_path(&self, force: bool) -> String {
        self.relative_to(&self.working_dir, force)
    }

    /// Relative path from `base` to this location.
    #[must_use]
    pub fn relative_to(&self, base: &str, force: bool) -> String {
        self.resolver.relative_path(base, &self.path, force)
    }

    /// The absolute path of this location.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The working directory relative paths are computed from.
    #[must_use]
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// The resolver used for navigation.
    #[must_use]
    pub const fn resolver(&self) -> PathResolver {
        self.resolver
    }

    /// Consume the location, returning its path.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    fn with_path(&self, path: String) -> Self {
        Self {
            resolver: self.resolver,
            working_dir: self.working_dir.clone(),
            path,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

fn current_dir() -> Result<String> {
    env::current_dir()?
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: raw.into(),
            reason: "Path contains invalid UTF-8".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    const UNIX: PathResolver = PathResolver::new(Platform::Unix);
    const WINDOWS: PathResolver = PathResolver::new(Platform::Windows);

    #[test]
    fn test_new_relative_is_resolved() {
        let location = Location::new(UNIX, "/mnt/c", "test/../other");
        assert_eq!(location.as_str(), "/mnt/c/other");
        assert_eq!(location.working_dir(), "/mnt/c");
    }

    #[test]
    fn test_new_absolute_is_verbatim() {
        let location = Location::new(UNIX, "/mnt/c", "/mnt/d/./x/");
        assert_eq!(location.as_str(), "/mnt/d/./x/");
    }

    #[test]
    fn test_go() {
        let location = Location::new(UNIX, "/", "/mnt/c");
        assert_eq!(location.go("test").as_str(), "/mnt/c/test");
        assert_eq!(location.go("/etc/../var").as_str(), "/var");
        assert_eq!(location.go("../../../x").as_str(), "/x");
    }

    #[test]
    fn test_parent() {
        let location = Location::new(UNIX, "/", "/mnt/c/file.txt");
        assert_eq!(location.parent().as_str(), "/mnt/c");
        assert_eq!(Location::new(UNIX, "/", "/").parent().as_str(), "/");
    }

    #[test]
    fn test_go_from_parent() {
        let file = Location::new(UNIX, "/", "/mnt/c/notes.txt");
        assert_eq!(file.go_from_parent("other.txt").as_str(), "/mnt/c/other.txt");
    }

    #[test]
    fn test_relative_path_from_working_dir() {
        let location = Location::new(UNIX, "/mnt/c/a/b/c", "/mnt/c/a/d/e");
        assert_eq!(location.relative_path(false), "../../d/e");

        let unrelated = Location::new(UNIX, "/a/b", "/x/y");
        assert_eq!(unrelated.relative_path(false), "/x/y");
        assert_eq!(unrelated.relative_path(true), "../../x/y");
    }

    #[test]
    fn test_relative_to() {
        let location = Location::new(UNIX, "/", "/a/b/c/d");
        assert_eq!(location.relative_to("/a/b/c", false), "./d");
    }

    #[test]
    fn test_windows_location() {
        let location = Location::new(WINDOWS, "C:\\Users\\dev", "projects\\app");
        assert_eq!(location.as_str(), "C:\\Users\\dev\\projects\\app");
        assert_eq!(location.go("D:\\data").as_str(), "D:\\data");
        assert_eq!(location.go("D:\\data").relative_path(true), "D:\\data");
        assert_eq!(location.parent().parent().as_str(), "C:\\Users\\dev");
    }

    #[test]
    fn test_display_and_into_string() {
        let location = Location::new(UNIX, "/mnt", "c");
        assert_eq!(location.to_string(), "/mnt/c");
        assert_eq!(AsRef::<str>::as_ref(&location), "/mnt/c");
        assert_eq!(location.into_string(), "/mnt/c");
    }

    #[test]
    fn test_navigation_keeps_working_dir() {
        let location = Location::new(UNIX, "/work", "a").go("b").parent();
        assert_eq!(location.working_dir(), "/work");
        assert_eq!(location.resolver(), UNIX);
    }

    #[test]
    #[cfg(unix)]
    fn test_current() {
        let location = Location::current(UNIX).unwrap();
        let cwd = env::current_dir().unwrap();
        assert_eq!(location.as_str(), cwd.to_str().unwrap());
        assert_eq!(location.relative_path(false), ".");
    }

    #[test]
    #[cfg(unix)]
    fn test_from_current_dir() {
        let location = Location::from_current_dir(UNIX, "child").unwrap();
        let cwd = env::current_dir().unwrap();
        assert!(location.as_str().starts_with(cwd.to_str().unwrap()));
        assert!(location.as_str().ends_with("/child"));
        assert_eq!(location.relative_path(false), "./child");
    }
}
