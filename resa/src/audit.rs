//! Append-only audit trail for reservation mutations.
//!
//! Every successful create, update, and cancel emits one human-readable
//! line to an [`AuditSink`]. Opening the sink is an explicit step that can
//! fail and be reported once; after that, appends are best-effort and a
//! failed write never reaches the caller of a store operation.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;
use crate::{Reservation, ReservationId};

/// A mutation event recorded in the audit trail.
///
/// Create and update events carry the full record snapshot; cancel events
/// carry only the id, since the record no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEvent<'a> {
    /// A reservation was created.
    Created(&'a Reservation),
    /// A reservation was updated; the snapshot holds the new values.
    Updated(&'a Reservation),
    /// A reservation was canceled.
    Canceled(ReservationId),
}

impl std::fmt::Display for AuditEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created(r) => write!(
                f,
                "created id={} name={:?} date={} guests={}",
                r.id(),
                r.name(),
                r.date_text(),
                r.guests()
            ),
            Self::Updated(r) => write!(
                f,
                "updated id={} name={:?} date={} guests={}",
                r.id(),
                r.name(),
                r.date_text(),
                r.guests()
            ),
            Self::Canceled(id) => write!(f, "canceled id={id}"),
        }
    }
}

/// An append-only destination for audit entries.
///
/// A sink is either backed by a file opened in append mode, or disabled
/// (entries are discarded). Write failures after a successful open are
/// swallowed; [`AuditSink::dropped_entries`] exposes how many entries were
/// lost that way.
///
/// # Examples
///
/// ```no_run
/// use resa::AuditSink;
///
/// let sink = AuditSink::open("/var/log/resa/reservations.log").unwrap();
/// assert!(sink.is_enabled());
/// ```
#[derive(Debug)]
pub struct AuditSink {
    file: Option<File>,
    path: Option<PathBuf>,
    dropped: u64,
}

impl AuditSink {
    /// Opens an audit sink appending to the file at `path`.
    ///
    /// Missing parent directories are created. This is the one point where
    /// sink I/O failures surface to the caller; everything after a
    /// successful open is best-effort.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories cannot be created or the
    /// file cannot be opened for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
            dropped: 0,
        })
    }

    /// Creates a disabled sink that discards every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::AuditSink;
    ///
    /// let sink = AuditSink::disabled();
    /// assert!(!sink.is_enabled());
    /// ```
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            file: None,
            path: None,
            dropped: 0,
        }
    }

    /// Returns whether this sink writes anywhere.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Returns the path backing this sink, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns how many entries were lost to failed writes.
    #[must_use]
    pub const fn dropped_entries(&self) -> u64 {
        self.dropped
    }

    /// Appends one entry for `event`, best-effort.
    ///
    /// A failed write increments the dropped counter and is otherwise
    /// ignored; the caller always proceeds.
    pub fn record(&mut self, event: &AuditEvent<'_>) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        if writeln!(file, "[{stamp}] {event}").is_err() {
            self.dropped += 1;
        }
    }
}

impl Default for AuditSink {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_reservation() -> Reservation {
        Reservation::new(
            ReservationId::new(1),
            "Alice Smith".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            4,
        )
    }

    #[test]
    fn test_event_display_created() {
        let r = sample_reservation();
        let line = format!("{}", AuditEvent::Created(&r));
        assert_eq!(line, "created id=1 name=\"Alice Smith\" date=2024-03-01 guests=4");
    }

    #[test]
    fn test_event_display_updated() {
        let r = sample_reservation();
        let line = format!("{}", AuditEvent::Updated(&r));
        assert!(line.starts_with("updated id=1"));
        assert!(line.contains("date=2024-03-01"));
    }

    #[test]
    fn test_event_display_canceled() {
        let line = format!("{}", AuditEvent::Canceled(ReservationId::new(7)));
        assert_eq!(line, "canceled id=7");
    }

    #[test]
    fn test_disabled_sink_discards() {
        let mut sink = AuditSink::disabled();
        let r = sample_reservation();
        sink.record(&AuditEvent::Created(&r));

        assert!(!sink.is_enabled());
        assert_eq!(sink.path(), None);
        assert_eq!(sink.dropped_entries(), 0);
    }

    #[test]
    fn test_open_creates_parent_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.log");

        let mut sink = AuditSink::open(&path).unwrap();
        assert!(sink.is_enabled());
        assert_eq!(sink.path(), Some(path.as_path()));

        let r = sample_reservation();
        sink.record(&AuditEvent::Created(&r));
        sink.record(&AuditEvent::Canceled(r.id()));
        drop(sink);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("created id=1"));
        assert!(lines[1].contains("canceled id=1"));
    }

    #[test]
    fn test_reopen_appends_rather_than_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let r = sample_reservation();

        let mut sink = AuditSink::open(&path).unwrap();
        sink.record(&AuditEvent::Created(&r));
        drop(sink);

        let mut sink = AuditSink::open(&path).unwrap();
        sink.record(&AuditEvent::Canceled(r.id()));
        drop(sink);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_open_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as an append-mode file.
        let result = AuditSink::open(dir.path());
        assert!(result.is_err());
    }
}
