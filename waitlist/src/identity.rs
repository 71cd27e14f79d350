//! Identifier types for customers and media.
//!
//! Both identifiers are opaque, trimmed, non-empty strings. Two customers are
//! the same waiter exactly when their [`CustomerId`]s compare equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which kind of identifier failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A customer identifier.
    Customer,
    /// A medium identifier.
    Medium,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Error returned when an identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdError {
    /// The kind of identifier that was rejected.
    pub kind: IdKind,
    /// The rejected raw value.
    pub value: String,
}

impl InvalidIdError {
    /// Describes why the value was rejected.
    #[must_use]
    pub fn reason(&self) -> String {
        format!(
            "{} id {:?} must be non-empty after trimming whitespace",
            self.kind, self.value
        )
    }
}

impl fmt::Display for InvalidIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} id: {}", self.kind, self.reason())
    }
}

impl std::error::Error for InvalidIdError {}

fn normalize(kind: IdKind, value: &str) -> Result<String, InvalidIdError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidIdError {
            kind,
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Identifies a customer of the lending system.
///
/// # Examples
///
/// ```
/// use waitlist::CustomerId;
///
/// let id = CustomerId::try_from("  k-1001 ").unwrap();
/// assert_eq!(id.as_str(), "k-1001");
///
/// assert!(CustomerId::try_from("").is_err());
/// assert!(CustomerId::try_from("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CustomerId {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize(IdKind::Customer, value).map(Self)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for CustomerId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a lendable medium (book, DVD, CD, ...).
///
/// # Examples
///
/// ```
/// use waitlist::MediumId;
///
/// let id: MediumId = "dvd-0042".parse().unwrap();
/// assert_eq!(format!("{id}"), "dvd-0042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediumId(String);

impl MediumId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for MediumId {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize(IdKind::Medium, value).map(Self)
    }
}

impl TryFrom<String> for MediumId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for MediumId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<MediumId> for String {
    fn from(id: MediumId) -> Self {
        id.0
    }
}

impl fmt::Display for MediumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
