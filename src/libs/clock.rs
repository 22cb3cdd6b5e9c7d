//! Clock abstraction for deterministic attendance marking.
//!
//! Every mark stores the clock reading it was made with, so the time
//! source is injected rather than read ambiently. Production code uses
//! [`SystemClock`]; tests pin a [`FixedClock`].

use chrono::{Local, NaiveDate};

/// One clock reading: epoch milliseconds plus the wall-clock text that
/// is stored on attendance records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub epoch_millis: i64,
    pub wall_clock: String,
}

/// Time source for the register.
pub trait Clock {
    /// Reading used to stamp attendance records.
    fn now(&self) -> Timestamp;
    /// Current calendar day, the default register date.
    fn today(&self) -> NaiveDate;
    /// Full ISO 8601 timestamp, used to stamp exports.
    fn iso_now(&self) -> String;
}

/// Real clock backed by the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = Local::now();
        Timestamp {
            epoch_millis: now.timestamp_millis(),
            wall_clock: now.format("%H:%M:%S").to_string(),
        }
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn iso_now(&self) -> String {
        Local::now().to_rfc3339()
    }
}

/// Clock pinned to fixed values for tests.
pub struct FixedClock {
    pub timestamp: Timestamp,
    pub date: NaiveDate,
    pub iso: String,
}

impl FixedClock {
    pub fn new(date: NaiveDate, wall_clock: &str, epoch_millis: i64) -> Self {
        FixedClock {
            timestamp: Timestamp {
                epoch_millis,
                wall_clock: wall_clock.to_string(),
            },
            date,
            iso: format!("{}T00:00:00+00:00", date),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp.clone()
    }

    fn today(&self) -> NaiveDate {
        self.date
    }

    fn iso_now(&self) -> String {
        self.iso.clone()
    }
}
