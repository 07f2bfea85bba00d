//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::path::{PathResolver, ResolverRegistry};
use crate::platform::Platform;

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered on top of each
/// other; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use pathalg::config::Config;
/// use pathalg::{Platform, ResolverRegistry};
///
/// let config: Config = serde_yaml::from_str("platform: windows\nforce: true\n").unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert!(config.force_default());
///
/// let registry = ResolverRegistry::new();
/// assert_eq!(config.resolver(&registry).platform(), Platform::Windows);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path grammar to use instead of the host's.
    pub platform: Option<Platform>,

    /// Default for the relative-path force flag.
    pub force: Option<bool>,

    /// Output verbosity.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured platform, or the host platform when unset.
    #[must_use]
    pub fn platform_or_host(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::host)
    }

    /// The configured force default, `false` when unset.
    #[must_use]
    pub fn force_default(&self) -> bool {
        self.force.unwrap_or(false)
    }

    /// The configured log level, `Normal` when unset.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or(LogLevel::Normal)
    }

    /// Look up the resolver for the configured platform.
    #[must_use]
    pub fn resolver<'r>(&self, registry: &'r ResolverRegistry) -> &'r PathResolver {
        registry.get(self.platform_or_host())
    }
}
