//! Error types for the waitlist library.
//!
//! Record operations only ever fail on constructor misuse. The remaining
//! variants belong to configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a waitlist error.
///
/// # Examples
///
/// ```
/// use waitlist::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the waitlist library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// The argument that was rejected.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },
}

impl From<crate::identity::InvalidIdError> for Error {
    fn from(err: crate::identity::InvalidIdError) -> Self {
        Self::InvalidArgument {
            field: err.kind.to_string(),
            reason: err.reason(),
        }
    }
}

impl Error {
    /// Check if the error was caused by a rejected argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     field: "customer".into(),
    ///     reason: "must not be empty".into(),
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
