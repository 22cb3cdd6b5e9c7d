//! # Rollcall - Roster and Daily Attendance Register
//!
//! A command-line utility for keeping a student roster and recording
//! per-day attendance with aggregate statistics.
//!
//! ## Features
//!
//! - **Roster Management**: Register, list, and remove students
//! - **Daily Register**: Per-date present/absent marks with timestamps
//! - **Filtering**: Search by id or name, filter by exact class
//! - **Statistics**: Per-day totals and attendance rate
//! - **Data Export**: Full JSON snapshots plus CSV/Excel day registers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
