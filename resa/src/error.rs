//! Error types for the resa library.
//!
//! This module provides the error hierarchy for reservation operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::ReservationId;

/// Result type alias for operations that may fail with a resa error.
///
/// # Examples
///
/// ```
/// use resa::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the resa library.
///
/// The taxonomy is deliberately small: lookups can miss, the audit sink can
/// fail to open, and the configuration file can fail to parse. Mutating
/// operations never raise for business-rule violations; `cancel` and
/// `update` report a missing id through their return flag instead of an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested reservation does not exist.
    #[error("reservation {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if error indicates a reservation does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::{Error, ReservationId};
    ///
    /// let err = Error::NotFound { id: ReservationId::new(9) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
