//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHALG_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::platform::Platform;

/// Environment variable selecting the path grammar.
pub const PLATFORM_ENV: &str = "PATHALG_PLATFORM";

/// Environment variable setting the default force flag.
pub const FORCE_ENV: &str = "PATHALG_FORCE";

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any PATHALG_* variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(platform) = env::var(PLATFORM_ENV) {
            config.platform = Some(platform.parse::<Platform>()?);
        }

        if let Ok(val) = env::var(FORCE_ENV) {
            config.force = Some(Self::parse_bool(FORCE_ENV, &val)?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            let level = LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(level);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [PLATFORM_ENV, FORCE_ENV, LOG_MODE_ENV];

    // Runs `f` with exactly the given PATHALG_* variables set
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for value in ["true", "TRUE", "1", "yes", "on"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
        for value in ["false", "False", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_variables_leaves_config_untouched() {
        with_env(&[], || {
            let mut config = Config {
                force: Some(true),
                ..Default::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.force, Some(true));
            assert_eq!(config.platform, None);
        });
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        with_env(
            &[
                (PLATFORM_ENV, "Windows"),
                (FORCE_ENV, "yes"),
                (LOG_MODE_ENV, "verbose"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.platform, Some(Platform::Windows));
                assert_eq!(config.force, Some(true));
                assert_eq!(config.log_mode, Some(LogLevel::Verbose));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_platform() {
        with_env(&[(PLATFORM_ENV, "amiga")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::InvalidPlatform { .. }));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_force() {
        with_env(&[(FORCE_ENV, "sometimes")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == FORCE_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_log_mode() {
        with_env(&[(LOG_MODE_ENV, "chatty")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }
}
