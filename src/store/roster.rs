//! Roster store: the ordered set of registered students.

use crate::libs::error::{RegisterError, Result};
use crate::libs::student::Student;
use std::collections::HashSet;

/// The complete set of registered students.
///
/// Insertion order is preserved and ids are unique at all times; a
/// rejected add leaves the roster untouched.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student, failing when the id is already taken.
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.find(&student.id).is_some() {
            return Err(RegisterError::DuplicateId(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes and returns the student. Strict: an unknown id is an
    /// error, not a no-op, so callers can report the bad id.
    pub fn remove(&mut self, id: &str) -> Result<Student> {
        let pos = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RegisterError::NotFound(id.to_string()))?;
        Ok(self.students.remove(pos))
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// All students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Distinct class names, lexicographically ascending. Blank classes
    /// are skipped.
    pub fn distinct_classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self
            .students
            .iter()
            .filter(|s| !s.class.is_empty())
            .map(|s| s.class.clone())
            .collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// Installs a whole roster at once (load and import paths),
    /// re-checking id uniqueness.
    pub fn replace_all(&mut self, students: Vec<Student>) -> Result<()> {
        let mut seen = HashSet::new();
        for student in &students {
            if !seen.insert(student.id.as_str()) {
                return Err(RegisterError::DuplicateId(student.id.clone()));
            }
        }
        self.students = students;
        Ok(())
    }
}
