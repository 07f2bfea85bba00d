//! Configuration system for pathalg.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.pathalg/config.yaml`)
//! - An explicitly named YAML file
//! - Environment variable overrides (PATHALG_*)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHALG_PLATFORM`, `PATHALG_FORCE`, `PATHALG_LOG_MODE`)
//! 3. Explicit file (via `ConfigBuilder::with_file`)
//! 4. User config (`~/.pathalg/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathalg::config::ConfigBuilder;
//! use pathalg::ResolverRegistry;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let registry = ResolverRegistry::new();
//! let resolver = config.resolver(&registry);
//! println!("{}", resolver.resolve("/srv", "app"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
