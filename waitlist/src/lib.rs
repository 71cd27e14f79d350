#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # waitlist
//!
//! Reservation queues for lendable media.
//!
//! A [`ReservationRecord`] tracks up to three customers waiting to borrow a
//! single medium, in the order they reserved it. A [`ReservationRegistry`]
//! keeps at most one record per medium and drives the reserve, cancel and
//! hand-out steps of a lending workflow.
//!
//! ## Core Types
//!
//! - [`CustomerId`] and [`MediumId`]: Validated identifiers
//! - [`ReservationRecord`] and [`WaitOutcome`]: The bounded wait queue
//! - [`ReservationRegistry`]: One record per medium
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use waitlist::{CustomerId, MediumId, ReservationRecord};
//!
//! let anna = CustomerId::try_from("anna").unwrap();
//! let ben = CustomerId::try_from("ben").unwrap();
//! let medium = MediumId::try_from("dvd-0042").unwrap();
//!
//! let mut record = ReservationRecord::new(anna.clone(), medium);
//! record.add_waiter(ben.clone());
//!
//! assert_eq!(record.first_waiter(), Some(&anna));
//! record.remove_waiter(&anna);
//! assert_eq!(record.first_waiter(), Some(&ben));
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod record;
pub mod registry;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use identity::{CustomerId, IdKind, InvalidIdError, MediumId};
pub use logging::{init_log_level, LogLevel};
pub use record::{DuplicatePolicy, ReservationRecord, WaitOutcome};
pub use registry::ReservationRegistry;
