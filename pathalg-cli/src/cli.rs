//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CleanCommand, CompletionsCommand, IsAbsoluteCommand, RelativeCommand, ResolveCommand,
    ShowPlatformCommand,
};
use crate::utils::{GlobalOptions, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Logical path resolution for Unix and Windows path grammars.
#[derive(Parser)]
#[command(name = "pathalg")]
#[command(version, about = "Resolve and relativize logical paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to use (unix or windows); defaults to the host's
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<String>,

    /// Additional configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Split out the options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            platform: self.platform.clone(),
            config: self.config.clone(),
            format: self.format,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path against a base
    Resolve(ResolveCommand),

    /// Compute the relative path between two absolute paths
    Relative(RelativeCommand),

    /// Check whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Normalize a path
    Clean(CleanCommand),

    /// Show the selected path grammar
    ShowPlatform(ShowPlatformCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
