//! One reservation record per medium.
//!
//! The registry is the owner of every [`ReservationRecord`]: it creates a
//! record on the first reservation of a medium and discards it as soon as
//! the last waiter leaves. It applies no policy about who may reserve
//! beyond the state of the queue itself.
//!
//! Like the records it holds, the registry is not synchronized. Wrap it in a
//! lock to share it between threads.

use std::collections::HashMap;

use crate::config::Config;
use crate::identity::{CustomerId, MediumId};
use crate::record::{DuplicatePolicy, ReservationRecord, WaitOutcome};

/// Maps each reserved medium to its reservation record.
///
/// # Examples
///
/// ```
/// use waitlist::{CustomerId, MediumId, ReservationRegistry};
///
/// let anna = CustomerId::try_from("anna").unwrap();
/// let ben = CustomerId::try_from("ben").unwrap();
/// let dvd = MediumId::try_from("dvd-1").unwrap();
///
/// let mut registry = ReservationRegistry::new();
/// registry.reserve(anna.clone(), dvd.clone());
/// registry.reserve(ben.clone(), dvd.clone());
///
/// // Only the head of the queue may borrow the medium.
/// assert!(!registry.may_borrow(&ben, &dvd));
/// assert!(registry.hand_out(&anna, &dvd));
/// assert_eq!(registry.first_waiter(&dvd), Some(&ben));
///
/// // The record disappears with its last waiter.
/// registry.cancel(&ben, &dvd);
/// assert!(!registry.is_reserved(&dvd));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReservationRegistry {
    records: HashMap<MediumId, ReservationRecord>,
    policy: DuplicatePolicy,
}

impl ReservationRegistry {
    /// Creates an empty registry that rejects duplicate waiters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose records use `policy`.
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            records: HashMap::new(),
            policy,
        }
    }

    /// Creates an empty registry configured from `config`.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_policy(config.duplicate_policy())
    }

    /// Returns the duplicate policy given to new records.
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Puts `customer` in line for `medium`.
    ///
    /// The first reservation of a medium creates its record. Later ones are
    /// subject to the record's capacity and duplicate rules.
    pub fn reserve(&mut self, customer: CustomerId, medium: MediumId) -> WaitOutcome {
        if let Some(record) = self.records.get_mut(&medium) {
            return record.add_waiter(customer);
        }

        let record = ReservationRecord::with_policy(customer, medium.clone(), self.policy);
        self.records.insert(medium, record);
        WaitOutcome::Added
    }

    /// Returns `true` if [`reserve`](Self::reserve) would add `customer`.
    #[must_use]
    pub fn can_reserve(&self, customer: &CustomerId, medium: &MediumId) -> bool {
        match self.records.get(medium) {
            None => true,
            Some(record) => {
                !record.is_full()
                    && (self.policy == DuplicatePolicy::Allow || !record.contains(customer))
            }
        }
    }

    /// Takes `customer` out of the queue for `medium`.
    ///
    /// Discards the record once nobody is waiting. Returns `true` if the
    /// customer was waiting.
    pub fn cancel(&mut self, customer: &CustomerId, medium: &MediumId) -> bool {
        let Some(record) = self.records.get_mut(medium) else {
            return false;
        };

        let removed = record.remove_waiter(customer);
        if record.is_empty() {
            self.records.remove(medium);
            log::debug!("discarded empty reservation record for {medium}");
        }
        removed
    }

    /// Returns `true` if `customer` is allowed to borrow `medium` now.
    ///
    /// That is the case when nobody has reserved the medium, or when
    /// `customer` is first in line.
    #[must_use]
    pub fn may_borrow(&self, customer: &CustomerId, medium: &MediumId) -> bool {
        match self.records.get(medium) {
            None => true,
            Some(record) => record.first_waiter() == Some(customer),
        }
    }

    /// Lends `medium` to `customer` if they may borrow it.
    ///
    /// A customer first in line leaves the queue. Returns `false` and
    /// changes nothing when someone else is ahead of them.
    pub fn hand_out(&mut self, customer: &CustomerId, medium: &MediumId) -> bool {
        if !self.may_borrow(customer, medium) {
            log::debug!("{customer} may not borrow {medium}: not first in line");
            return false;
        }
        if self.records.contains_key(medium) {
            self.cancel(customer, medium);
        }
        true
    }

    /// Returns the customer first in line for `medium`.
    #[must_use]
    pub fn first_waiter(&self, medium: &MediumId) -> Option<&CustomerId> {
        self.records.get(medium).and_then(ReservationRecord::first_waiter)
    }

    /// Returns the record for `medium`, if it has been reserved.
    #[must_use]
    pub fn record(&self, medium: &MediumId) -> Option<&ReservationRecord> {
        self.records.get(medium)
    }

    /// Returns `true` if anyone is waiting for `medium`.
    #[must_use]
    pub fn is_reserved(&self, medium: &MediumId) -> bool {
        self.records.contains_key(medium)
    }

    /// Returns the number of reserved media.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no medium is reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &ReservationRecord> {
        self.records.values()
    }

    /// Lists the media `customer` is waiting for with their place in line,
    /// sorted by medium.
    #[must_use]
    pub fn reservations_of(&self, customer: &CustomerId) -> Vec<(&MediumId, usize)> {
        let mut found: Vec<_> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .position(customer)
                    .map(|position| (record.medium(), position))
            })
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> CustomerId {
        CustomerId::try_from(id).unwrap()
    }

    fn medium(id: &str) -> MediumId {
        MediumId::try_from(id).unwrap()
    }

    #[test]
    fn test_first_reservation_creates_record() {
        let mut registry = ReservationRegistry::new();
        assert!(registry.is_empty());

        let outcome = registry.reserve(customer("k1"), medium("m"));
        assert_eq!(outcome, WaitOutcome::Added);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.record(&medium("m")).unwrap().waiters(),
            &[customer("k1")]
        );
    }

    #[test]
    fn test_one_record_per_medium() {
        let mut registry = ReservationRegistry::new();
        registry.reserve(customer("k1"), medium("m"));
        registry.reserve(customer("k2"), medium("m"));
        registry.reserve(customer("k1"), medium("n"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.record(&medium("m")).unwrap().len(), 2);
    }

    #[test]
    fn test_reserve_full_queue() {
        let mut registry = ReservationRegistry::new();
        for id in ["k1", "k2", "k3"] {
            registry.reserve(customer(id), medium("m"));
        }
        assert!(!registry.can_reserve(&customer("k4"), &medium("m")));
        assert_eq!(
            registry.reserve(customer("k4"), medium("m")),
            WaitOutcome::QueueFull
        );
        assert_eq!(registry.record(&medium("m")).unwrap().len(), 3);
    }

    #[test]
    fn test_can_reserve_rejects_waiting_customer() {
        let mut registry = ReservationRegistry::new();
        registry.reserve(customer("k1"), medium("m"));
        assert!(!registry.can_reserve(&customer("k1"), &medium("m")));
        assert!(registry.can_reserve(&customer("k2"), &medium("m")));
        assert!(registry.can_reserve(&customer("k1"), &medium("other")));
    }

    #[test]
    fn test_can_reserve_with_allow_policy() {
        let mut registry = ReservationRegistry::with_policy(DuplicatePolicy::Allow);
        registry.reserve(customer("k1"), medium("m"));
        assert!(registry.can_reserve(&customer("k1"), &medium("m")));
        assert!(registry.reserve(customer("k1"), medium("m")).is_added());
    }

    #[test]
    fn test_with_config_uses_policy() {
        let config = Config {
            duplicate_policy: Some(DuplicatePolicy::Allow),
            ..Default::default()
        };
        let registry = ReservationRegistry::with_config(&config);
        assert_eq!(registry.duplicate_policy(), DuplicatePolicy::Allow);
    }

    #[test]
    fn test_cancel_discards_empty_record() {
        let mut registry = ReservationRegistry::new();
        registry.reserve(customer("k1"), medium("m"));
        assert!(registry.cancel(&customer("k1"), &medium("m")));
        assert!(!registry.is_reserved(&medium("m")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cancel_unknown() {
        let mut registry = ReservationRegistry::new();
        assert!(!registry.cancel(&customer("k1"), &medium("m")));

        registry.reserve(customer("k1"), medium("m"));
        assert!(!registry.cancel(&customer("k2"), &medium("m")));
        assert!(registry.is_reserved(&medium("m")));
    }

    #[test]
    fn test_may_borrow() {
        let mut registry = ReservationRegistry::new();
        assert!(registry.may_borrow(&customer("anyone"), &medium("m")));

        registry.reserve(customer("k1"), medium("m"));
        registry.reserve(customer("k2"), medium("m"));
        assert!(registry.may_borrow(&customer("k1"), &medium("m")));
        assert!(!registry.may_borrow(&customer("k2"), &medium("m")));
        assert!(!registry.may_borrow(&customer("k3"), &medium("m")));
    }

    #[test]
    fn test_hand_out_to_head() {
        let mut registry = ReservationRegistry::new();
        registry.reserve(customer("k1"), medium("m"));
        registry.reserve(customer("k2"), medium("m"));

        assert!(!registry.hand_out(&customer("k2"), &medium("m")));
        assert_eq!(registry.record(&medium("m")).unwrap().len(), 2);

        assert!(registry.hand_out(&customer("k1"), &medium("m")));
        assert_eq!(registry.first_waiter(&medium("m")), Some(&customer("k2")));

        assert!(registry.hand_out(&customer("k2"), &medium("m")));
        assert!(!registry.is_reserved(&medium("m")));
    }

    #[test]
    fn test_hand_out_unreserved() {
        let mut registry = ReservationRegistry::new();
        assert!(registry.hand_out(&customer("k1"), &medium("m")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reservations_of() {
        let mut registry = ReservationRegistry::new();
        registry.reserve(customer("k1"), medium("b"));
        registry.reserve(customer("k2"), medium("a"));
        registry.reserve(customer("k1"), medium("a"));
        registry.reserve(customer("k2"), medium("c"));

        let found = registry.reservations_of(&customer("k1"));
        assert_eq!(found, vec![(&medium("a"), 1), (&medium("b"), 0)]);
        assert!(registry.reservations_of(&customer("nobody")).is_empty());
        assert_eq!(registry.records().count(), 3);
    }
}
