//! Pure query functions over the roster and one day of the ledger.

use crate::libs::student::Student;
use crate::store::ledger::{DayRecords, Status};
use serde::Serialize;

/// Aggregate attendance counts for one date over a (possibly filtered)
/// student subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Attendance rate in whole percent. Zero when no students match.
    pub rate: u32,
}

/// Filters students by search text and class.
///
/// The search matches case-insensitively against id and name substrings;
/// the class filter is an exact match. Empty strings match everything,
/// both conditions AND together, and the original order is preserved.
pub fn filter_students<'a>(students: &'a [Student], search: &str, class: &str) -> Vec<&'a Student> {
    let needle = search.to_lowercase();
    students
        .iter()
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle) || s.id.to_lowercase().contains(&needle))
        .filter(|s| class.is_empty() || s.class == class)
        .collect()
}

/// Computes day statistics for a filtered subset against that day's
/// records.
///
/// The rate is `present / total * 100` rounded half-to-even, so a tie
/// like 12.5% lands on the even neighbor (12).
pub fn aggregate_stats(filtered: &[&Student], records: &DayRecords) -> DayStats {
    let total = filtered.len();
    let present = filtered
        .iter()
        .filter(|s| records.get(s.id.as_str()).map(|r| r.status) == Some(Status::Present))
        .count();
    let absent = filtered
        .iter()
        .filter(|s| records.get(s.id.as_str()).map(|r| r.status) == Some(Status::Absent))
        .count();
    let rate = if total > 0 {
        (present as f64 / total as f64 * 100.0).round_ties_even() as u32
    } else {
        0
    };

    DayStats { total, present, absent, rate }
}
