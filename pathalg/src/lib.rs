#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathalg
//!
//! Logical path resolution for Unix and Windows path grammars.
//!
//! This library resolves path fragments against a base, decides whether a
//! string is an absolute path under a platform's grammar, and computes the
//! shortest relative path between two absolute paths. It works purely on
//! strings: no symlinks are followed and no filesystem access happens.
//!
//! ## Core Types
//!
//! - [`Platform`]: The path grammar family (Unix or Windows)
//! - [`PathResolver`]: Resolution, normalization and relative paths
//! - [`ResolverRegistry`]: Memoized resolver-per-platform lookup
//! - [`Location`]: A navigable absolute path
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathalg::{Platform, ResolverRegistry};
//!
//! let registry = ResolverRegistry::new();
//! let unix = registry.get(Platform::Unix);
//!
//! assert_eq!(unix.resolve("/mnt/c", "test"), "/mnt/c/test");
//! assert_eq!(unix.relative_path("/a/b/c", "/a", false), "../..");
//! assert!(registry.for_hint(Some("Windows")).is_absolute_path("D:"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Location, PathGrammar, PathResolver, ResolverRegistry};
pub use platform::Platform;
