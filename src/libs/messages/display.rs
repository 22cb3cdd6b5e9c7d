//! Display implementation for rollcall application messages.
//!
//! Converts structured `Message` variants into the human-readable text
//! shown in the terminal. All user-facing wording lives here, in one
//! place, so the rest of the code never embeds display strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentAdded(name) => format!("Student '{}' added successfully", name),
            Message::StudentRemoved(name) => format!("Student '{}' removed successfully", name),
            Message::StudentIdExists(id) => format!("Student ID '{}' already exists", id),
            Message::StudentNotFound(id) => format!("No student found with ID '{}'", id),
            Message::InvalidStudentInput(reason) => format!("Invalid student data: {}", reason),
            Message::RosterEmpty => "The roster is empty.".to_string(),
            Message::NoStudentsMatchFilter => "No students match the current filters.".to_string(),
            Message::NoClassesRegistered => "No classes registered yet.".to_string(),
            Message::ConfirmRemoveStudent(name) => {
                format!("Remove '{}' and all their attendance records?", name)
            }
            Message::RemovalCancelled => "Removal cancelled.".to_string(),
            Message::PromptStudentId => "Student ID".to_string(),
            Message::PromptStudentName => "Full name".to_string(),
            Message::PromptStudentClass => "Class (optional)".to_string(),
            Message::PromptStudentEmail => "Email (optional)".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::Marked { name, status } => format!("{} marked as {}", name, status),
            Message::MarkedAllPresent(count) => format!("Marked {} students as present", count),
            Message::RegisterHeader(date) => format!("Attendance register for {}", date),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::PromptStorageDir => "Storage directory (leave empty for the system default)".to_string(),
            Message::PromptSeedRoster => "Seed the sample roster when none exists?".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::SnapshotJsonOnly => "Snapshot export supports only the JSON format".to_string(),

            // === ERROR MESSAGES ===
            Message::PersistFailed(reason) => {
                format!("Saving failed ({}); changes are kept for this session only", reason)
            }
            Message::InvalidDate(value) => format!("Invalid date '{}', expected `today` or YYYY-MM-DD", value),
        };
        write!(f, "{}", text)
    }
}
