//! Logical path algebra for Unix and Windows grammars.
//!
//! This module turns a base path and a path fragment into a normalized
//! absolute path, decides whether a string is absolute under a platform's
//! grammar, and computes the shortest relative path between two absolute
//! paths. Everything works on strings; nothing here touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Grammar
//!
//! A [`PathGrammar`] describes one platform: its separator (`/` or `\`),
//! what makes a path absolute (a leading `/`, or a single drive letter and
//! colon), and where a Windows drive prefix ends.
//!
//! ## Normalization
//!
//! Normalization splits a path on runs of the separator, drops `.`
//! segments, lets each `..` consume the segment before it, and joins the
//! result. A `..` with nothing to consume is dropped, so a path can never
//! climb above its root.
//!
//! ## Relative paths
//!
//! [`relative::relative_path`] climbs out of the unshared part of the base
//! with `..` and descends into the target. Paths on different Windows
//! drives, and (unless forced) paths sharing no leading segment, are
//! returned unchanged.
//!
//! # Examples
//!
//! ```
//! use pathalg::{Platform, ResolverRegistry};
//!
//! let registry = ResolverRegistry::new();
//! let unix = registry.get(Platform::Unix);
//!
//! assert_eq!(unix.resolve("/mnt/c", "test"), "/mnt/c/test");
//! assert_eq!(unix.relative_path("/mnt/c/a/b/c", "/mnt/c/a/b/c/d/e/", false), "./d/e");
//!
//! let windows = registry.get(Platform::Windows);
//! assert_eq!(windows.relative_path("C:\\a\\b\\c", "D:\\x", true), "D:\\x");
//! ```

pub mod grammar;
pub mod location;
pub mod normalize;
pub mod registry;
pub mod relative;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use grammar::PathGrammar;
pub use location::Location;
pub use registry::ResolverRegistry;
pub use resolver::PathResolver;
