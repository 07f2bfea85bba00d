//! Per-platform path grammar.
//!
//! A grammar knows three things about a platform: which character separates
//! segments, what makes a path absolute, and (on Windows) where the drive
//! prefix ends. Everything here is a pure function of the input string.

use crate::platform::Platform;

/// Separator used by Unix paths.
pub const UNIX_SEPARATOR: char = '/';

/// Separator used by Windows paths.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Constants and predicates describing a platform's path syntax.
///
/// # Examples
///
/// ```
/// use pathalg::path::PathGrammar;
/// use pathalg::Platform;
///
/// let windows = PathGrammar::new(Platform::Windows);
/// assert!(windows.is_absolute("D:\\folder\\file"));
/// assert!(!windows.is_absolute("NotADrive:\\"));
/// assert_eq!(windows.drive("C:\\a"), Some("C:"));
///
/// let unix = PathGrammar::new(Platform::Unix);
/// assert!(unix.is_absolute("/mnt/c"));
/// assert_eq!(unix.drive("/mnt/c"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathGrammar {
    platform: Platform,
}

impl PathGrammar {
    /// Create the grammar for `platform`.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// The platform this grammar describes.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// The segment separator character.
    #[must_use]
    pub const fn separator(&self) -> char {
        match self.platform {
            Platform::Unix => UNIX_SEPARATOR,
            Platform::Windows => WINDOWS_SEPARATOR,
        }
    }

    /// Whether `path` is absolute under this grammar.
    ///
    /// Unix paths are absolute when they start with `/`. Windows paths are
    /// absolute when everything up to and including the first `:` is a single
    /// ASCII letter followed by the colon, so `D:` counts but `D`, `\x` and
    /// `NotADrive:\` do not.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        match self.platform {
            Platform::Unix => path.starts_with(UNIX_SEPARATOR),
            Platform::Windows => self.drive(path).is_some_and(is_drive_letter),
        }
    }

    /// The drive prefix of `path`, including its colon.
    ///
    /// Returns `None` when the path has no `:`, and always on Unix. The
    /// prefix is returned as-is; use [`PathGrammar::is_absolute`] to check
    /// that it is a real drive letter.
    #[must_use]
    pub fn drive<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self.platform {
            Platform::Unix => None,
            Platform::Windows => path.find(':').map(|colon| &path[..=colon]),
        }
    }
}

fn is_drive_letter(prefix: &str) -> bool {
    matches!(prefix.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}
