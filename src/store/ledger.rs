//! Attendance ledger: per-date, per-student records.
//!
//! Records are keyed by calendar day and student id. A slot with no
//! record is "unmarked", which is distinct from absent; records only
//! ever hold an explicit present/absent mark and are replaced whole on
//! re-mark. The ledger does not know the roster: membership checks are
//! the register's job, so removals can cascade here without a cycle.

use crate::libs::clock::Timestamp;
use crate::libs::error::{RegisterError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};

/// Attendance status of one student on one date.
///
/// `Unmarked` is the query-side sentinel for a missing record; it is
/// never stored and cannot be marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unmarked,
    Present,
    Absent,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Status::Unmarked => "unmarked",
            Status::Present => "present",
            Status::Absent => "absent",
        };
        write!(f, "{}", text)
    }
}

/// One attendance mark. Overwritten as a whole when the slot is marked
/// again; the field names are the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub status: Status,
    pub time: String,
    pub timestamp: i64,
}

/// Records of one calendar day, keyed by student id.
pub type DayRecords = BTreeMap<String, AttendanceRecord>;

/// All attendance records across all dates.
///
/// Serializes transparently as the date-keyed map, which is exactly the
/// persisted `attendance` blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, DayRecords>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a status for one student on one date, replacing any
    /// previous record in that slot.
    pub fn mark(&mut self, date: NaiveDate, student_id: &str, status: Status, stamp: &Timestamp) -> Result<()> {
        if status == Status::Unmarked {
            return Err(RegisterError::InvalidInput("a mark must be `present` or `absent`".to_string()));
        }
        self.days.entry(date).or_default().insert(
            student_id.to_string(),
            AttendanceRecord {
                status,
                time: stamp.wall_clock.clone(),
                timestamp: stamp.epoch_millis,
            },
        );
        Ok(())
    }

    /// Marks every given id present with one shared clock reading.
    ///
    /// The input is validated before anything is written, so the call is
    /// all-or-nothing; duplicate ids collapse into a single record.
    /// Returns the number of distinct students marked.
    pub fn mark_all_present(&mut self, date: NaiveDate, student_ids: &[String], stamp: &Timestamp) -> Result<usize> {
        if student_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(RegisterError::InvalidInput("student ids must not be empty".to_string()));
        }
        let day = self.days.entry(date).or_default();
        let mut marked = HashSet::new();
        for id in student_ids {
            day.insert(
                id.clone(),
                AttendanceRecord {
                    status: Status::Present,
                    time: stamp.wall_clock.clone(),
                    timestamp: stamp.epoch_millis,
                },
            );
            marked.insert(id.as_str());
        }
        Ok(marked.len())
    }

    /// Status for the slot; `Unmarked` when nothing was recorded. Never
    /// an error, unknown ids included.
    pub fn status_for(&self, date: NaiveDate, student_id: &str) -> Status {
        self.record_for(date, student_id).map(|r| r.status).unwrap_or(Status::Unmarked)
    }

    pub fn record_for(&self, date: NaiveDate, student_id: &str) -> Option<&AttendanceRecord> {
        self.days.get(&date).and_then(|day| day.get(student_id))
    }

    /// Full id-to-record mapping for one date, empty when the day has no
    /// records. Returned by value so callers can never alias live state.
    pub fn records_for(&self, date: NaiveDate) -> DayRecords {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    /// Removes every record for the id across all dates. Days left with
    /// no records disappear entirely.
    pub fn purge_student(&mut self, student_id: &str) {
        for day in self.days.values_mut() {
            day.remove(student_id);
        }
        self.days.retain(|_, day| !day.is_empty());
    }

    /// The whole date-keyed map, for persistence and snapshots.
    pub fn days(&self) -> &BTreeMap<NaiveDate, DayRecords> {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
