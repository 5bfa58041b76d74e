#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # resa
//!
//! A library for managing guest reservations.
//!
//! This library provides the in-memory core of a single-user reservation
//! manager: record storage with store-assigned ids, create/list/get/cancel/
//! update/search operations, and an append-only audit trail of mutations.
//! There is no persistence of the records themselves and no internal
//! concurrency; every operation is synchronous.
//!
//! ## Core Types
//!
//! - [`ReservationStore`]: owns the records and implements every operation
//! - [`Reservation`] and [`ReservationId`]: the record and its identifier
//! - [`AuditSink`] and [`AuditEvent`]: the append-only mutation log
//! - [`Error`] and [`Result`]: error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use resa::ReservationStore;
//!
//! let mut store = ReservationStore::new();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let made = store.create("Alice Smith", date, 4);
//! assert_eq!(made.id().value(), 1);
//!
//! assert_eq!(store.search("alice").len(), 1);
//! assert!(store.cancel(made.id()));
//! assert!(store.list().is_empty());
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use audit::{AuditEvent, AuditSink};
pub use config::{default_audit_log_path, default_data_dir, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Reservation, ReservationId};
pub use store::ReservationStore;
