//! Application controller: one context object composing the roster, the
//! ledger, the storage backend, and the clock.
//!
//! Every mutating operation runs the same sequence: validate, mutate the
//! in-memory collections, persist the full state. Persistence is always
//! a complete re-serialization of both blobs, so the stored snapshot
//! matches the last completed action. When a write fails the in-memory
//! state stays authoritative for the running session and the failure
//! propagates as `Persistence`; nothing is rolled back.

use crate::libs::clock::Clock;
use crate::libs::error::{RegisterError, Result};
use crate::libs::query::{self, DayStats};
use crate::libs::student::{NewStudent, Student};
use crate::store::blob::{StorageBackend, ATTENDANCE_KEY, STUDENTS_KEY};
use crate::store::ledger::{DayRecords, Ledger, Status};
use crate::store::roster::Roster;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sample roster installed on an empty register when seeding is enabled.
const SEED_ROSTER: &[(&str, &str, &str, &str)] = &[
    ("STU001", "Alice Johnson", "Grade 10A", "alice@school.edu"),
    ("STU002", "Bob Smith", "Grade 10A", "bob@school.edu"),
    ("STU003", "Carol Davis", "Grade 10B", "carol@school.edu"),
    ("STU004", "David Wilson", "Grade 10B", "david@school.edu"),
    ("STU005", "Eva Brown", "Grade 11A", "eva@school.edu"),
    ("STU006", "Frank Miller", "Grade 11A", "frank@school.edu"),
    ("STU007", "Grace Lee", "Grade 11B", "grace@school.edu"),
    ("STU008", "Henry Taylor", "Grade 11B", "henry@school.edu"),
];

/// One row of the daily register, ready for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct DayRow {
    pub id: String,
    pub name: String,
    pub class: String,
    pub status: Status,
    pub time: Option<String>,
}

/// Portable snapshot of the whole register state.
///
/// Deep copy: the document shares nothing with the live register, and
/// its two data fields are exactly the persisted blob layouts, so a
/// snapshot can be loaded back as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub attendance: BTreeMap<NaiveDate, DayRecords>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
}

pub struct Register {
    roster: Roster,
    ledger: Ledger,
    store: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl Register {
    /// Loads both blobs from the store (empty when absent) and seeds the
    /// sample roster on a fresh install when asked to.
    pub fn load(store: Box<dyn StorageBackend>, clock: Box<dyn Clock>, seed: bool) -> Result<Self> {
        let mut register = Register {
            roster: Roster::new(),
            ledger: Ledger::new(),
            store,
            clock,
        };

        if let Some(blob) = register.store.get(STUDENTS_KEY)? {
            let students: Vec<Student> = serde_json::from_str(&blob)?;
            register.roster.replace_all(students)?;
        }
        if let Some(blob) = register.store.get(ATTENDANCE_KEY)? {
            register.ledger = serde_json::from_str(&blob)?;
        }

        if seed && register.roster.is_empty() {
            register.install_seed()?;
        }

        Ok(register)
    }

    fn install_seed(&mut self) -> Result<()> {
        for (id, name, class, email) in SEED_ROSTER {
            self.roster.add(Student {
                id: id.to_string(),
                name: name.to_string(),
                class: class.to_string(),
                email: email.to_string(),
            })?;
        }
        self.persist()
    }

    /// Registers a student. The id must be unused; all fields arrive
    /// untrimmed and are cleaned up here.
    pub fn add_student(&mut self, new: NewStudent) -> Result<Student> {
        let student = new.into_student()?;
        self.roster.add(student.clone())?;
        self.persist()?;
        Ok(student)
    }

    /// Removes a student together with every attendance record they own,
    /// as one logical operation.
    ///
    /// Destructive: callers are expected to have obtained confirmation
    /// before invoking this.
    pub fn remove_student(&mut self, id: &str) -> Result<Student> {
        let student = self.roster.remove(id)?;
        self.ledger.purge_student(id);
        self.persist()?;
        Ok(student)
    }

    /// Marks one student for one date. Unknown ids are rejected here, so
    /// the ledger itself stays roster-agnostic.
    pub fn mark(&mut self, date: NaiveDate, id: &str, status: Status) -> Result<Student> {
        let student = self
            .roster
            .find(id)
            .cloned()
            .ok_or_else(|| RegisterError::NotFound(id.to_string()))?;
        let stamp = self.clock.now();
        self.ledger.mark(date, id, status, &stamp)?;
        self.persist()?;
        Ok(student)
    }

    /// Marks every student matching the filters present, all with one
    /// shared clock reading. Returns how many were marked; zero matches
    /// is not an error and writes nothing.
    pub fn mark_all_present(&mut self, date: NaiveDate, search: &str, class: &str) -> Result<usize> {
        let ids: Vec<String> = query::filter_students(self.roster.students(), search, class)
            .iter()
            .map(|s| s.id.clone())
            .collect();
        if ids.is_empty() {
            return Ok(0);
        }

        let stamp = self.clock.now();
        let count = self.ledger.mark_all_present(date, &ids, &stamp)?;
        self.persist()?;
        Ok(count)
    }

    pub fn students(&self) -> &[Student] {
        self.roster.students()
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.roster.find(id)
    }

    pub fn distinct_classes(&self) -> Vec<String> {
        self.roster.distinct_classes()
    }

    pub fn filtered_students(&self, search: &str, class: &str) -> Vec<&Student> {
        query::filter_students(self.roster.students(), search, class)
    }

    pub fn status_for(&self, date: NaiveDate, id: &str) -> Status {
        self.ledger.status_for(date, id)
    }

    pub fn records_for(&self, date: NaiveDate) -> DayRecords {
        self.ledger.records_for(date)
    }

    /// View models for the daily register under the given filters.
    pub fn day_rows(&self, date: NaiveDate, search: &str, class: &str) -> Vec<DayRow> {
        let records = self.ledger.records_for(date);
        query::filter_students(self.roster.students(), search, class)
            .into_iter()
            .map(|s| {
                let record = records.get(s.id.as_str());
                DayRow {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    class: s.class.clone(),
                    status: record.map(|r| r.status).unwrap_or(Status::Unmarked),
                    time: record.map(|r| r.time.clone()),
                }
            })
            .collect()
    }

    pub fn stats_for(&self, date: NaiveDate, search: &str, class: &str) -> DayStats {
        let records = self.ledger.records_for(date);
        let filtered = query::filter_students(self.roster.students(), search, class);
        query::aggregate_stats(&filtered, &records)
    }

    /// The clock's current calendar day, the default date for commands.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Deep snapshot of the current state, stamped with the export time.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.roster.students().to_vec(),
            attendance: self.ledger.days().clone(),
            export_date: self.clock.iso_now(),
        }
    }

    fn persist(&mut self) -> Result<()> {
        let students = serde_json::to_string(self.roster.students())?;
        let attendance = serde_json::to_string(self.ledger.days())?;
        self.store.set(STUDENTS_KEY, &students)?;
        self.store.set(ATTENDANCE_KEY, &attendance)?;
        Ok(())
    }
}
