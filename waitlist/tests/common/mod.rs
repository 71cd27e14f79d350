//! Common test utilities for integration tests.

use waitlist::{CustomerId, DuplicatePolicy, MediumId, ReservationRecord};

/// Shorthand for a valid customer id.
#[allow(dead_code)]
pub fn customer(id: &str) -> CustomerId {
    CustomerId::try_from(id).expect("valid customer id")
}

/// Shorthand for a valid medium id.
#[allow(dead_code)]
pub fn medium(id: &str) -> MediumId {
    MediumId::try_from(id).expect("valid medium id")
}

/// Builder for reservation records with a given queue.
///
/// ```no_run
/// # use common::RecordFixture;
/// let record = RecordFixture::new("dvd-1").waiting(&["k1", "k2"]).build();
/// ```
#[allow(dead_code)]
pub struct RecordFixture {
    medium: String,
    waiters: Vec<String>,
    policy: DuplicatePolicy,
}

#[allow(dead_code)]
impl RecordFixture {
    /// Creates a fixture for `medium` with a single waiter `k1`.
    pub fn new(medium: &str) -> Self {
        Self {
            medium: medium.to_string(),
            waiters: vec!["k1".to_string()],
            policy: DuplicatePolicy::Reject,
        }
    }

    /// Replaces the queue, head first. Must name at least one customer.
    pub fn waiting(mut self, waiters: &[&str]) -> Self {
        self.waiters = waiters.iter().map(|w| (*w).to_string()).collect();
        self
    }

    /// Sets the duplicate policy.
    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the record by replaying the queue through `add_waiter`.
    pub fn build(self) -> ReservationRecord {
        let mut waiters = self.waiters.iter();
        let first = waiters.next().expect("fixture needs at least one waiter");
        let mut record =
            ReservationRecord::with_policy(customer(first), medium(&self.medium), self.policy);
        for waiter in waiters {
            record.add_waiter(customer(waiter));
        }
        record
    }
}
