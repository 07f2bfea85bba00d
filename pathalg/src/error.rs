//! Error types for the pathalg library.
//!
//! The path algebra itself never fails. These errors come from the layers
//! around it: configuration loading, platform name parsing, and reading the
//! process working directory.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathalg error.
///
/// # Examples
///
/// ```
/// use pathalg::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/mnt/c".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathalg library.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform name could not be recognized.
    #[error("invalid platform '{value}': expected 'unix' or 'windows'")]
    InvalidPlatform {
        /// The unrecognized value.
        value: String,
    },

    /// A filesystem path could not be used as a logical path.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error originates from configuration input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathalg::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "force".into(),
    ///     message: "expected a boolean".into(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::InvalidPlatform { .. }
        )
    }
}
