//! The reservation record of a single medium.
//!
//! A record holds the customers waiting to borrow one medium, in the order
//! they reserved it, up to [`ReservationRecord::CAPACITY`] of them. Records
//! do not synchronize internally; callers sharing one across threads must
//! serialize access themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identity::{CustomerId, MediumId};

/// How [`ReservationRecord::add_waiter`] treats a customer already waiting.
///
/// # Examples
///
/// ```
/// use waitlist::DuplicatePolicy;
///
/// assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
/// assert_eq!(DuplicatePolicy::parse("ALLOW").unwrap(), DuplicatePolicy::Allow);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// A customer holds at most one place in line.
    #[default]
    Reject,
    /// A customer may be queued more than once.
    Allow,
}

impl DuplicatePolicy {
    /// Parses a policy from a string ("reject" or "allow", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            _ => Err(format!("invalid duplicate policy: {s}")),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Allow => write!(f, "allow"),
        }
    }
}

/// What happened when a customer asked to join a queue.
///
/// Neither rejection is an error; the queue is simply left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The customer is now last in line.
    Added,
    /// The queue already holds the maximum number of waiters.
    QueueFull,
    /// The customer is already waiting and duplicates are rejected.
    AlreadyWaiting,
}

impl WaitOutcome {
    /// Returns `true` if the customer joined the queue.
    #[must_use]
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// The bounded, ordered list of customers waiting for one medium.
///
/// # Examples
///
/// ```
/// use waitlist::{CustomerId, MediumId, ReservationRecord, WaitOutcome};
///
/// let k = |s: &str| CustomerId::try_from(s).unwrap();
/// let medium = MediumId::try_from("cd-17").unwrap();
///
/// let mut record = ReservationRecord::new(k("k1"), medium);
/// record.add_waiter(k("k2"));
/// record.add_waiter(k("k3"));
/// assert!(record.is_full());
///
/// assert_eq!(record.add_waiter(k("k4")), WaitOutcome::QueueFull);
/// assert_eq!(record.waiters(), &[k("k1"), k("k2"), k("k3")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ReservationRecord {
    medium: MediumId,
    waiters: Vec<CustomerId>,
    duplicate_policy: DuplicatePolicy,
}

// Unchecked shape of a serialized record.
#[derive(Deserialize)]
struct RawRecord {
    medium: MediumId,
    waiters: Vec<CustomerId>,
    #[serde(default)]
    duplicate_policy: DuplicatePolicy,
}

impl TryFrom<RawRecord> for ReservationRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> std::result::Result<Self, Self::Error> {
        if raw.waiters.len() > Self::CAPACITY {
            return Err(format!(
                "record for {} has {} waiters, at most {} allowed",
                raw.medium,
                raw.waiters.len(),
                Self::CAPACITY
            ));
        }
        if raw.duplicate_policy == DuplicatePolicy::Reject {
            let mut seen = std::collections::HashSet::new();
            if let Some(dup) = raw.waiters.iter().find(|w| !seen.insert(*w)) {
                return Err(format!("{dup} is queued twice for {}", raw.medium));
            }
        }
        Ok(Self {
            medium: raw.medium,
            waiters: raw.waiters,
            duplicate_policy: raw.duplicate_policy,
        })
    }
}

impl ReservationRecord {
    /// Maximum number of customers that can wait for one medium.
    pub const CAPACITY: usize = 3;

    /// Creates a record for `medium` with `customer` as the only waiter.
    #[must_use]
    pub fn new(customer: CustomerId, medium: MediumId) -> Self {
        Self::with_policy(customer, medium, DuplicatePolicy::default())
    }

    /// Creates a record with an explicit duplicate policy.
    #[must_use]
    pub fn with_policy(customer: CustomerId, medium: MediumId, policy: DuplicatePolicy) -> Self {
        log::debug!("creating reservation record for {medium} with first waiter {customer}");
        let mut waiters = Vec::with_capacity(Self::CAPACITY);
        waiters.push(customer);
        Self {
            medium,
            waiters,
            duplicate_policy: policy,
        }
    }

    /// Creates a record from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// either identifier is empty or whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist::ReservationRecord;
    ///
    /// let record = ReservationRecord::try_new("k1", "book-1").unwrap();
    /// assert_eq!(record.len(), 1);
    ///
    /// let err = ReservationRecord::try_new("", "book-1").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn try_new(customer: &str, medium: &str) -> Result<Self> {
        let customer = CustomerId::try_from(customer)?;
        let medium = MediumId::try_from(medium)?;
        Ok(Self::new(customer, medium))
    }

    /// Returns the medium this record belongs to.
    #[must_use]
    pub const fn medium(&self) -> &MediumId {
        &self.medium
    }

    /// Returns the duplicate policy applied by [`add_waiter`](Self::add_waiter).
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Returns `true` once [`CAPACITY`](Self::CAPACITY) customers are waiting.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.waiters.len() == Self::CAPACITY
    }

    /// Returns the number of waiting customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waiters.len()
    }

    /// Returns `true` if nobody is waiting. An empty record can be discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waiters.is_empty()
    }

    /// Returns `true` if `customer` holds a place in line.
    #[must_use]
    pub fn contains(&self, customer: &CustomerId) -> bool {
        self.waiters.contains(customer)
    }

    /// Returns the zero-based place in line of `customer`, if waiting.
    #[must_use]
    pub fn position(&self, customer: &CustomerId) -> Option<usize> {
        self.waiters.iter().position(|w| w == customer)
    }

    /// Appends `customer` to the end of the queue.
    ///
    /// A full queue is left unchanged, as is a queue already holding
    /// `customer` under [`DuplicatePolicy::Reject`]. The returned outcome
    /// says which case applied.
    pub fn add_waiter(&mut self, customer: CustomerId) -> WaitOutcome {
        if self.is_full() {
            log::debug!("{}: queue full, not adding {customer}", self.medium);
            return WaitOutcome::QueueFull;
        }
        if self.duplicate_policy == DuplicatePolicy::Reject && self.contains(&customer) {
            log::debug!("{}: {customer} is already waiting", self.medium);
            return WaitOutcome::AlreadyWaiting;
        }

        log::trace!(
            "{}: adding {customer} at position {}",
            self.medium,
            self.waiters.len()
        );
        self.waiters.push(customer);
        WaitOutcome::Added
    }

    /// Removes the first occurrence of `customer`; later waiters move up.
    ///
    /// Returns `true` if a waiter was removed.
    pub fn remove_waiter(&mut self, customer: &CustomerId) -> bool {
        match self.position(customer) {
            Some(index) => {
                self.waiters.remove(index);
                log::trace!("{}: removed {customer} from position {index}", self.medium);
                true
            }
            None => false,
        }
    }

    /// Returns the customer at the head of the queue without removing them.
    #[must_use]
    pub fn first_waiter(&self) -> Option<&CustomerId> {
        self.waiters.first()
    }

    /// Returns the waiting customers, head first.
    #[must_use]
    pub fn waiters(&self) -> &[CustomerId] {
        &self.waiters
    }
}

#[cfg(test)]
mod proptests;
