//! Property-based tests for `ReservationRecord`.

use super::{DuplicatePolicy, ReservationRecord, WaitOutcome};
use crate::{CustomerId, MediumId};
use proptest::prelude::*;

// A small alphabet so that generated operations collide often.
fn customer_strategy() -> impl Strategy<Value = CustomerId> {
    "k[0-5]".prop_map(|s| CustomerId::try_from(s).unwrap())
}

#[derive(Debug, Clone)]
enum Op {
    Add(CustomerId),
    Remove(CustomerId),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        customer_strategy().prop_map(Op::Add),
        customer_strategy().prop_map(Op::Remove),
    ]
}

fn policy_strategy() -> impl Strategy<Value = DuplicatePolicy> {
    prop_oneof![Just(DuplicatePolicy::Reject), Just(DuplicatePolicy::Allow)]
}

fn apply(record: &mut ReservationRecord, op: &Op) {
    match op {
        Op::Add(c) => {
            record.add_waiter(c.clone());
        }
        Op::Remove(c) => {
            record.remove_waiter(c);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The queue never grows past its capacity
    #[test]
    fn length_never_exceeds_capacity(
        first in customer_strategy(),
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let medium = MediumId::try_from("m").unwrap();
        let mut record = ReservationRecord::with_policy(first, medium, policy);
        for op in &ops {
            apply(&mut record, op);
            prop_assert!(record.len() <= ReservationRecord::CAPACITY);
            prop_assert_eq!(record.is_full(), record.len() == ReservationRecord::CAPACITY);
        }
    }

    // Under the default policy no customer is queued twice
    #[test]
    fn reject_policy_keeps_waiters_unique(
        first in customer_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let medium = MediumId::try_from("m").unwrap();
        let mut record = ReservationRecord::new(first, medium);
        for op in &ops {
            apply(&mut record, op);
            let waiters = record.waiters();
            for (i, w) in waiters.iter().enumerate() {
                prop_assert!(!waiters[i + 1..].contains(w));
            }
        }
    }

    // Removing a waiter keeps the relative order of everyone else
    #[test]
    fn remove_preserves_relative_order(
        first in customer_strategy(),
        adds in prop::collection::vec(customer_strategy(), 0..5),
        victim in customer_strategy()
    ) {
        let medium = MediumId::try_from("m").unwrap();
        let mut record = ReservationRecord::new(first, medium);
        for c in adds {
            record.add_waiter(c);
        }

        let mut expected = record.waiters().to_vec();
        if let Some(index) = expected.iter().position(|w| w == &victim) {
            expected.remove(index);
        }

        record.remove_waiter(&victim);
        prop_assert_eq!(record.waiters(), expected.as_slice());
        prop_assert!(!record.contains(&victim));
    }

    // An accepted customer is always appended at the tail
    #[test]
    fn added_customer_becomes_last(
        first in customer_strategy(),
        candidate in customer_strategy()
    ) {
        let medium = MediumId::try_from("m").unwrap();
        let mut record = ReservationRecord::new(first, medium);
        let before = record.len();
        if record.add_waiter(candidate.clone()) == WaitOutcome::Added {
            prop_assert_eq!(record.len(), before + 1);
            prop_assert_eq!(record.waiters().last(), Some(&candidate));
        } else {
            prop_assert_eq!(record.len(), before);
        }
    }

    // Peeking is pure
    #[test]
    fn first_waiter_is_idempotent(
        first in customer_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20)
    ) {
        let medium = MediumId::try_from("m").unwrap();
        let mut record = ReservationRecord::new(first, medium);
        for op in &ops {
            apply(&mut record, op);
        }

        let snapshot = record.clone();
        let a = record.first_waiter().cloned();
        let b = record.first_waiter().cloned();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.as_ref(), record.waiters().first());
        prop_assert_eq!(record, snapshot);
    }
}
