//! Path resolution against a base directory.
//!
//! This module provides the `PathResolver` type, the single entry point for
//! the path algebra of one platform.

use crate::path::grammar::PathGrammar;
use crate::path::{normalize, relative};
use crate::platform::Platform;

/// Resolves, normalizes and relativizes paths for one platform grammar.
///
/// A resolver holds no state besides its grammar, so it is `Copy` and can be
/// shared freely across threads. Every method is total: malformed input is
/// normalized mechanically instead of producing an error.
///
/// # Examples
///
/// ```
/// use pathalg::{PathResolver, Platform};
///
/// let unix = PathResolver::new(Platform::Unix);
/// assert_eq!(unix.resolve("/mnt/c", "test"), "/mnt/c/test");
/// assert_eq!(unix.resolve("/mnt/c/test/test2", "/mnt/d/test4/../test3"), "/mnt/d/test3");
/// assert_eq!(unix.relative_path("/mnt/c/a/b/c", "/mnt/c/a/d/e", false), "../../d/e");
///
/// let windows = PathResolver::new(Platform::Windows);
/// assert_eq!(windows.resolve("C:\\test\\test2", "D:\\test4"), "D:\\test4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathResolver {
    grammar: PathGrammar,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(Platform::host())
    }
}

impl PathResolver {
    /// Create a resolver for `platform`.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            grammar: PathGrammar::new(platform),
        }
    }

    /// The platform this resolver works with.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.grammar.platform()
    }

    /// The grammar backing this resolver.
    #[must_use]
    pub const fn grammar(&self) -> PathGrammar {
        self.grammar
    }

    /// The segment separator of this platform.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.grammar.separator()
    }

    /// Whether `path` is absolute under this platform's grammar.
    #[must_use]
    pub fn is_absolute_path(&self, path: &str) -> bool {
        self.grammar.is_absolute(path)
    }

    /// The drive prefix of `path` (Windows only).
    #[must_use]
    pub fn drive<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.grammar.drive(path)
    }

    /// Resolve `fragment` against `base` and normalize the result.
    ///
    /// An absolute fragment discards the base entirely. A relative fragment
    /// is appended to the base with one separator. Either way the result has
    /// `.` and `..` segments resolved, with excess `..` silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathalg::{PathResolver, Platform};
    ///
    /// let windows = PathResolver::new(Platform::Windows);
    /// assert_eq!(windows.resolve("C:", "\\test"), "C:\\test");
    /// assert_eq!(
    ///     windows.resolve("E:\\test\\test2", "test4\\..\\test3"),
    ///     "E:\\test\\test2\\test3"
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, base: &str, fragment: &str) -> String {
        let resolved = if self.is_absolute_path(fragment) {
            self.clean(fragment)
        } else {
            let separator = self.separator();
            self.clean(&format!("{base}{separator}{fragment}"))
        };

        log::trace!("resolved {fragment:?} against {base:?} to {resolved:?}");
        resolved
    }

    /// Normalize `path` without a base.
    ///
    /// On Windows a drive prefix is kept verbatim and always followed by one
    /// separator; only the part after it is cleaned. Paths without a drive
    /// (and all Unix paths) are cleaned as a whole, keeping a leading
    /// separator as the root.
    #[must_use]
    pub fn clean(&self, path: &str) -> String {
        let separator = self.separator();

        if let Some(drive) = self.drive(path).filter(|_| self.is_absolute_path(path)) {
            let body = &path[drive.len()..];
            let segments = normalize::clean_segments(normalize::split(body, separator));
            return format!(
                "{drive}{separator}{}",
                normalize::join(&segments, separator)
            );
        }

        normalize::clean(path, separator)
    }

    /// Shortest relative path from `base` to `target`.
    ///
    /// See [`relative::relative_path`] for the exact rules, including when the
    /// target is returned unchanged.
    #[must_use]
    pub fn relative_path(&self, base: &str, target: &str, force: bool) -> String {
        relative::relative_path(self.grammar, base, target, force)
    }
}
