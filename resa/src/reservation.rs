//! Reservation record types.
//!
//! This module provides the [`Reservation`] record and its [`ReservationId`]
//! identifier. Records are created and mutated exclusively by
//! [`ReservationStore`](crate::ReservationStore); callers only ever see
//! immutable views or copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unique identifier for a reservation.
///
/// Identifiers are assigned by the store, starting at 1 and increasing
/// monotonically. An id is never reused, even after the reservation it
/// belonged to has been canceled.
///
/// # Examples
///
/// ```
/// use resa::ReservationId;
///
/// let id = ReservationId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(format!("{id}"), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// Creates a reservation id from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A guest reservation.
///
/// A reservation records a name, a calendar date (no time-of-day), and a
/// guest count under a store-assigned id. The name may be empty and the
/// guest count may be zero or negative; the store performs no business-rule
/// validation on either.
///
/// The id is immutable for the lifetime of the record. The remaining fields
/// change only through [`ReservationStore::update`](crate::ReservationStore::update).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resa::ReservationStore;
///
/// let mut store = ReservationStore::new();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let reservation = store.create("Alice Smith", date, 4);
///
/// assert_eq!(reservation.id().value(), 1);
/// assert_eq!(reservation.name(), "Alice Smith");
/// assert_eq!(reservation.date(), date);
/// assert_eq!(reservation.guests(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    name: String,
    date: NaiveDate,
    guests: i32,
}

impl Reservation {
    /// Only the store constructs records.
    pub(crate) fn new(id: ReservationId, name: String, date: NaiveDate, guests: i32) -> Self {
        Self {
            id,
            name,
            date,
            guests,
        }
    }

    /// Only the store mutates records; the id is left untouched.
    pub(crate) fn overwrite(&mut self, name: String, date: NaiveDate, guests: i32) {
        self.name = name;
        self.date = date;
        self.guests = guests;
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the reservation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the guest count.
    #[must_use]
    pub const fn guests(&self) -> i32 {
        self.guests
    }

    /// Returns the date in its canonical `YYYY-MM-DD` textual form.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use resa::ReservationStore;
    ///
    /// let mut store = ReservationStore::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let reservation = store.create("Bob", date, 2);
    /// assert_eq!(reservation.date_text(), "2024-03-01");
    /// ```
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date.to_string()
    }

    /// Checks whether this reservation matches a search query.
    ///
    /// A reservation matches if the query is a case-insensitive substring of
    /// its name, or if the query is exactly the canonical `YYYY-MM-DD` form
    /// of its date. A record matching both counts once.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use resa::ReservationStore;
    ///
    /// let mut store = ReservationStore::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let reservation = store.create("Alice Smith", date, 4);
    ///
    /// assert!(reservation.matches("alice"));
    /// assert!(reservation.matches("2024-03-01"));
    /// assert!(!reservation.matches("2024-03"));
    /// ```
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.date_text() == query
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.id, self.name, self.date, self.guests
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reservation_id_display() {
        let id = ReservationId::new(42);
        assert_eq!(format!("{id}"), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_reservation_id_ordering() {
        assert!(ReservationId::new(1) < ReservationId::new(2));
        assert_eq!(ReservationId::new(3), ReservationId::new(3));
    }

    #[test]
    fn test_reservation_accessors() {
        let r = Reservation::new(
            ReservationId::new(1),
            "Alice".to_string(),
            date(2024, 3, 1),
            4,
        );
        assert_eq!(r.id(), ReservationId::new(1));
        assert_eq!(r.name(), "Alice");
        assert_eq!(r.date(), date(2024, 3, 1));
        assert_eq!(r.guests(), 4);
    }

    #[test]
    fn test_reservation_overwrite_keeps_id() {
        let mut r = Reservation::new(
            ReservationId::new(7),
            "Alice".to_string(),
            date(2024, 1, 1),
            2,
        );
        r.overwrite("Bob".to_string(), date(2024, 2, 2), 4);

        assert_eq!(r.id(), ReservationId::new(7));
        assert_eq!(r.name(), "Bob");
        assert_eq!(r.date(), date(2024, 2, 2));
        assert_eq!(r.guests(), 4);
    }

    #[test]
    fn test_date_text_is_iso() {
        let r = Reservation::new(
            ReservationId::new(1),
            "Alice".to_string(),
            date(2024, 3, 1),
            4,
        );
        assert_eq!(r.date_text(), "2024-03-01");

        // Single-digit month and day are zero-padded
        let r = Reservation::new(ReservationId::new(2), "Bob".to_string(), date(2025, 1, 9), 2);
        assert_eq!(r.date_text(), "2025-01-09");
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let r = Reservation::new(
            ReservationId::new(1),
            "Alice Smith".to_string(),
            date(2024, 3, 1),
            4,
        );
        assert!(r.matches("alice"));
        assert!(r.matches("SMITH"));
        assert!(r.matches("ce Sm"));
        assert!(!r.matches("bob"));
    }

    #[test]
    fn test_matches_date_exact_only() {
        let r = Reservation::new(
            ReservationId::new(1),
            "Bob".to_string(),
            date(2024, 3, 1),
            2,
        );
        assert!(r.matches("2024-03-01"));
        assert!(!r.matches("2024-03"));
        assert!(!r.matches("2024-03-02"));
    }

    #[test]
    fn test_matches_empty_query() {
        // Empty string is a substring of every name
        let r = Reservation::new(
            ReservationId::new(1),
            "Alice".to_string(),
            date(2024, 3, 1),
            4,
        );
        assert!(r.matches(""));
    }

    #[test]
    fn test_display_format() {
        let r = Reservation::new(
            ReservationId::new(3),
            "Alice".to_string(),
            date(2024, 3, 1),
            4,
        );
        assert_eq!(format!("{r}"), "3 - Alice - 2024-03-01 - 4");
    }

    #[test]
    fn test_reservation_serde() {
        let r = Reservation::new(
            ReservationId::new(1),
            "Alice".to_string(),
            date(2024, 3, 1),
            4,
        );
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, r);
    }
}
