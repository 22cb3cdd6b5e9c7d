//! Student model and registration input.

use crate::libs::error::{RegisterError, Result};
use serde::{Deserialize, Serialize};

/// A registered student.
///
/// Immutable once added; corrections go through removal and
/// re-registration. The serialized field names are the persisted layout,
/// so they must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub class: String,
    pub email: String,
}

/// Raw field values for a student about to be registered.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub class: String,
    pub email: String,
}

impl NewStudent {
    /// Trims every field and validates the required ones.
    ///
    /// `id` and `name` must be non-empty after trimming; `class` and
    /// `email` may stay blank.
    pub fn into_student(self) -> Result<Student> {
        let student = Student {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            class: self.class.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        if student.id.is_empty() {
            return Err(RegisterError::InvalidInput("student id must not be empty".to_string()));
        }
        if student.name.is_empty() {
            return Err(RegisterError::InvalidInput("student name must not be empty".to_string()));
        }
        Ok(student)
    }
}
