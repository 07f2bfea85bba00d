//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a path against a base
//! - `relative`: Compute the relative path between two absolute paths
//! - `is_absolute`: Check a path against the platform grammar
//! - `clean`: Normalize a path
//! - `show_platform`: Show the selected path grammar
//! - `completions`: Generate shell completion scripts

pub mod clean;
pub mod completions;
pub mod is_absolute;
pub mod relative;
pub mod resolve;
pub mod show_platform;

pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use show_platform::ShowPlatformCommand;
