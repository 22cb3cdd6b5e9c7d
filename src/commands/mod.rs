//! Command-line surface of the rollcall application.
//!
//! One module per subcommand; every command opens the register through
//! [`open_register`], performs its action, and reports the outcome with
//! the message macros. The core never prints.

pub mod add;
pub mod export;
pub mod init;
pub mod list;
pub mod mark;
pub mod mark_all;
pub mod remove;
pub mod report;

use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::error::RegisterError;
use crate::libs::messages::Message;
use crate::libs::register::Register;
use crate::msg_error_anyhow;
use crate::store::blob::FileStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Register a new student")]
    Add(add::AddArgs),
    #[command(about = "Remove a student and their attendance records")]
    Remove(remove::RemoveArgs),
    #[command(about = "Display the roster")]
    List(list::ListArgs),
    #[command(about = "Mark one student present or absent")]
    Mark(mark::MarkArgs),
    #[command(about = "Mark every matching student present")]
    MarkAll(mark_all::MarkAllArgs),
    #[command(about = "Display the daily register with statistics")]
    Report(report::ReportArgs),
    #[command(about = "Export attendance data")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Remove(args) => remove::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Mark(args) => mark::cmd(args),
            Commands::MarkAll(args) => mark_all::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Opens the register over the configured storage location with the
/// system clock.
pub(crate) fn open_register() -> Result<Register> {
    let config = Config::read()?;
    let store = FileStore::with_storage(config.data_storage());
    Ok(Register::load(Box::new(store), Box::new(SystemClock), config.seed_roster)?)
}

/// Maps a core error into the user-facing anyhow error for commands
/// that have no special handling for it. Persistence failures get the
/// keep-in-memory wording; everything else passes through.
pub(crate) fn surface(err: RegisterError) -> anyhow::Error {
    match err {
        RegisterError::Persistence(reason) => msg_error_anyhow!(Message::PersistFailed(reason)),
        other => other.into(),
    }
}

/// Parses `today` or an ISO `YYYY-MM-DD` date.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
