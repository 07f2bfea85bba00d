//! Platform identifiers for path grammars.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The path grammar family a resolver works with.
///
/// # Examples
///
/// ```
/// use pathalg::Platform;
///
/// assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
/// assert_eq!(Platform::from_hint(Some("Darwin")), Platform::Unix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// POSIX-style paths rooted at `/`.
    Unix,
    /// Drive-letter paths separated by `\`.
    Windows,
}

impl Platform {
    /// The platform matching the operating system this binary was built for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Select a platform from an operating-system family hint.
    ///
    /// `"Windows"` (in any letter case) selects the Windows grammar, any other
    /// value selects Unix, and no hint selects the host platform.
    #[must_use]
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some(family) if family.eq_ignore_ascii_case("windows") => Self::Windows,
            Some(_) => Self::Unix,
            None => Self::host(),
        }
    }

    /// Lowercase name used in configuration files and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Strict parse: only `unix` and `windows` are accepted, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::InvalidPlatform {
                value: s.to_string(),
            }),
        }
    }
}
