//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::record::DuplicatePolicy;

/// Complete configuration structure.
///
/// Every field is optional so that partial documents from several sources
/// can be merged; the accessor methods resolve the built-in defaults.
///
/// # Examples
///
/// ```
/// use waitlist::config::Config;
/// use waitlist::{DuplicatePolicy, LogLevel};
///
/// let config = Config {
///     duplicate_policy: Some(DuplicatePolicy::Allow),
///     ..Default::default()
/// };
/// assert_eq!(config.duplicate_policy(), DuplicatePolicy::Allow);
/// assert_eq!(config.log_level(), LogLevel::Normal);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether a customer may hold more than one place in the same queue.
    pub duplicate_policy: Option<DuplicatePolicy>,

    /// Verbosity of library diagnostics.
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Returns the configured duplicate policy, defaulting to `Reject`.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy.unwrap_or_default()
    }

    /// Returns the configured log level, defaulting to `Normal`.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }
}
