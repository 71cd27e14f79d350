//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `WAITLIST_DUPLICATE_POLICY`: `reject` or `allow`
//! - `WAITLIST_LOG_LEVEL`: `quiet`, `normal` or `verbose`

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::record::DuplicatePolicy;

/// Environment variable selecting the duplicate policy.
pub const DUPLICATE_POLICY_VAR: &str = "WAITLIST_DUPLICATE_POLICY";

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "WAITLIST_LOG_LEVEL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use waitlist::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `WAITLIST_*` environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// Variables that are set but blank are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognized value.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = Self::non_blank(DUPLICATE_POLICY_VAR, lookup(DUPLICATE_POLICY_VAR)) {
            let policy = DuplicatePolicy::parse(&val).map_err(|message| Error::Validation {
                field: DUPLICATE_POLICY_VAR.into(),
                message,
            })?;
            config.duplicate_policy = Some(policy);
        }

        if let Some(val) = Self::non_blank(LOG_LEVEL_VAR, lookup(LOG_LEVEL_VAR)) {
            let level = LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_LEVEL_VAR.into(),
                message,
            })?;
            config.log_level = Some(level);
        }

        Ok(())
    }

    fn non_blank(key: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if v.trim().is_empty() => {
                log::warn!("ignoring blank environment variable {key}");
                None
            }
            other => other,
        }
    }
}
