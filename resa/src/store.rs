//! The in-memory reservation store.
//!
//! [`ReservationStore`] owns every live [`Reservation`], assigns ids, and
//! exposes the create/list/get/cancel/update/search operations. Lookups are
//! linear scans; the expected record count is small and the operation
//! contracts would not change if an id index were added later.

use chrono::NaiveDate;

use crate::audit::{AuditEvent, AuditSink};
use crate::error::{Error, Result};
use crate::{Reservation, ReservationId};

/// An in-memory collection of guest reservations.
///
/// The store keeps records in creation order and hands out ids starting at 1,
/// increasing by one per create and never reused. Each instance is fully
/// independent; there is no shared global state. All operations are
/// synchronous and run to completion. The store is not internally
/// synchronized, so a multi-threaded adopter must wrap the whole store in a
/// single exclusive lock.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resa::ReservationStore;
///
/// let mut store = ReservationStore::new();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let made = store.create("Alice", date, 4);
/// assert_eq!(made.id().value(), 1);
///
/// assert_eq!(store.list().len(), 1);
/// assert!(store.get(made.id()).is_ok());
///
/// assert!(store.cancel(made.id()));
/// assert!(store.get(made.id()).is_err());
/// ```
#[derive(Debug)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    next_id: u64,
    audit: AuditSink,
}

impl ReservationStore {
    /// Creates an empty store with a disabled audit sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::ReservationStore;
    ///
    /// let store = ReservationStore::new();
    /// assert!(store.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: 1,
            audit: AuditSink::disabled(),
        }
    }

    /// Creates an empty store recording mutations to `audit`.
    ///
    /// Opening the sink is the caller's responsibility so that an unopenable
    /// sink can be reported once, up front; see [`AuditSink::open`].
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::{AuditSink, ReservationStore};
    ///
    /// let store = ReservationStore::with_audit(AuditSink::disabled());
    /// assert!(store.is_empty());
    /// ```
    #[must_use]
    pub const fn with_audit(audit: AuditSink) -> Self {
        Self {
            reservations: Vec::new(),
            next_id: 1,
            audit,
        }
    }

    /// Returns the number of live reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns whether the store holds no live reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Returns a view of the audit sink.
    #[must_use]
    pub const fn audit(&self) -> &AuditSink {
        &self.audit
    }

    /// Creates a reservation and returns a snapshot of the stored record.
    ///
    /// The new record gets the next id and is appended to the end of the
    /// live sequence, so creation order and listing order coincide. The name
    /// and guest count are stored verbatim; an empty name or a non-positive
    /// guest count is accepted. Always succeeds.
    ///
    /// Emits one `created` audit entry containing the full record.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        date: NaiveDate,
        guests: i32,
    ) -> Reservation {
        let id = ReservationId::new(self.next_id);
        self.next_id += 1;

        let reservation = Reservation::new(id, name.into(), date, guests);
        self.audit.record(&AuditEvent::Created(&reservation));
        let snapshot = reservation.clone();
        self.reservations.push(reservation);
        snapshot
    }

    /// Returns all live reservations in creation order.
    #[must_use]
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no live reservation has this id.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use resa::{ReservationId, ReservationStore};
    ///
    /// let mut store = ReservationStore::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let made = store.create("Alice", date, 4);
    ///
    /// assert_eq!(store.get(made.id()).unwrap().name(), "Alice");
    /// assert!(store.get(ReservationId::new(99)).unwrap_err().is_not_found());
    /// ```
    pub fn get(&self, id: ReservationId) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id() == id)
            .ok_or(Error::NotFound { id })
    }

    /// Cancels a reservation, removing it permanently.
    ///
    /// Returns `true` and emits a `canceled` audit entry if the id was
    /// found; returns `false` with no side effect otherwise. The relative
    /// order of the remaining records is preserved, and the canceled id is
    /// never handed out again.
    pub fn cancel(&mut self, id: ReservationId) -> bool {
        let Some(index) = self.reservations.iter().position(|r| r.id() == id) else {
            return false;
        };
        self.reservations.remove(index);
        self.audit.record(&AuditEvent::Canceled(id));
        true
    }

    /// Updates a reservation in place.
    ///
    /// Overwrites the name, date, and guest count of the record with this
    /// id; the id and the record's position in the sequence are untouched.
    /// Returns `true` and emits an `updated` audit entry with the new values
    /// if the id was found; returns `false` with no side effect otherwise.
    pub fn update(
        &mut self,
        id: ReservationId,
        name: impl Into<String>,
        date: NaiveDate,
        guests: i32,
    ) -> bool {
        let Some(reservation) = self.reservations.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        reservation.overwrite(name.into(), date, guests);
        let snapshot = reservation.clone();
        self.audit.record(&AuditEvent::Updated(&snapshot));
        true
    }

    /// Searches reservations by name substring or exact date.
    ///
    /// The query matches a record if it is a case-insensitive substring of
    /// the name, or exactly the record's `YYYY-MM-DD` date text. Results are
    /// in creation order with no duplicates. An empty result is a normal
    /// outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use resa::ReservationStore;
    ///
    /// let mut store = ReservationStore::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// store.create("Alice Smith", date, 4);
    /// store.create("Bob", date, 2);
    ///
    /// assert_eq!(store.search("alice").len(), 1);
    /// assert_eq!(store.search("2024-03-01").len(), 2);
    /// assert!(store.search("nobody").is_empty());
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.matches(query))
            .collect()
    }
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}
