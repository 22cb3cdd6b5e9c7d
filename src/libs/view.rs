//! Terminal table rendering for rosters, registers, and statistics.
//!
//! The rendering layer consumes plain view models; nothing in here
//! mutates or queries the register.

use crate::libs::query::DayStats;
use crate::libs::register::DayRow;
use crate::libs::student::Student;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn students(students: &[Student]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CLASS", "EMAIL"]);
        for student in students {
            table.add_row(row![student.id, student.name, student.class, student.email]);
        }
        table.printstd();
    }

    pub fn register(rows: &[DayRow]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CLASS", "STATUS", "TIME"]);
        for entry in rows {
            table.add_row(row![
                entry.id,
                entry.name,
                entry.class,
                entry.status,
                entry.time.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();
    }

    pub fn classes(classes: &[String]) {
        let mut table = Table::new();

        table.add_row(row!["CLASS"]);
        for class in classes {
            table.add_row(row![class]);
        }
        table.printstd();
    }

    pub fn stats(stats: &DayStats) {
        let mut table = Table::new();

        table.add_row(row!["PRESENT", "ABSENT", "TOTAL", "RATE"]);
        table.add_row(row![stats.present, stats.absent, stats.total, format!("{}%", stats.rate)]);
        table.printstd();
    }
}
