//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: global options,
//! configuration loading, resolver selection and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use pathalg::config::{Config, ConfigBuilder};
use pathalg::{Logger, PathResolver, Platform, ResolverRegistry};
use serde::Serialize;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path grammar requested on the command line.
    pub platform: Option<String>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Output format for command results.
    pub format: OutputFormat,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One bare value per line.
    #[default]
    Plain,
    /// A single JSON object.
    Json,
}

/// Everything a command needs once options and configuration are loaded.
#[derive(Debug)]
pub struct Session {
    /// The merged configuration.
    pub config: Config,

    /// Output format for command results.
    pub format: OutputFormat,

    registry: ResolverRegistry,
}

impl Session {
    /// Wrap a loaded configuration with a fresh resolver registry.
    pub fn new(config: Config, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            registry: ResolverRegistry::new(),
        }
    }

    /// The resolver for the configured platform.
    pub fn resolver(&self) -> &PathResolver {
        self.config.resolver(&self.registry)
    }

    /// Print `value`, or its plain rendering in plain mode.
    pub fn emit<T: Serialize>(&self, plain: &str, value: &T) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Plain => println!("{plain}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }
}

/// Parse a `--platform` value.
pub fn parse_platform(value: &str) -> Result<Platform, CliError> {
    value
        .parse()
        .map_err(|e: pathalg::Error| CliError::InvalidArguments(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user configuration file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    if let Some(ref platform) = global.platform {
        builder = builder.with_config(Config {
            platform: Some(parse_platform(platform)?),
            ..Config::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the stderr logger for this run.
///
/// Explicit `--verbose`/`--quiet` flags win; otherwise the configured level
/// applies, which already includes `PATHALG_LOG_MODE`.
pub fn select_logger(global: &GlobalOptions, config: Option<&Config>) -> Logger {
    if global.verbose || global.quiet {
        return pathalg::init_logger(global.verbose, global.quiet);
    }

    match config {
        Some(config) => Logger::new(config.log_level()),
        None => pathalg::init_logger(false, false),
    }
}
