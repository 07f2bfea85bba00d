//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathalg::config::{Config, ConfigMerger};
///
/// let low = Config { force: Some(false), ..Default::default() };
/// let high = Config { force: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.force, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources into a final config, honoring each source's precedence.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in &sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.force.is_some() {
            target.force = source.force;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
    }
}
