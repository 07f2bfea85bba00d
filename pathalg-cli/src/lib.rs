//! Library exports for pathalg-cli.
//!
//! This module exports the CLI structure so the binary and integration
//! tooling share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
