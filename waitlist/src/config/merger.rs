//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use waitlist::config::{Config, ConfigMerger};
/// use waitlist::LogLevel;
///
/// let low = Config { log_level: Some(LogLevel::Quiet), ..Default::default() };
/// let high = Config { log_level: Some(LogLevel::Verbose), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_level, Some(LogLevel::Verbose));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; any `Some` field in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.duplicate_policy.is_some() {
            target.duplicate_policy = source.duplicate_policy;
        }

        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }
    }
}
