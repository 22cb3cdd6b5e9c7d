//! Single-student marking command.

use crate::libs::error::RegisterError;
use crate::libs::messages::Message;
use crate::store::ledger::Status;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

/// Status values a mark can record. `unmarked` is deliberately not a
/// choice; a slot becomes unmarked only by never being marked.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MarkStatus {
    Present,
    Absent,
}

impl From<MarkStatus> for Status {
    fn from(value: MarkStatus) -> Self {
        match value {
            MarkStatus::Present => Status::Present,
            MarkStatus::Absent => Status::Absent,
        }
    }
}

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// Student id to mark
    #[arg(required = true)]
    id: String,
    /// Status to record
    #[arg(value_enum)]
    status: MarkStatus,
    /// Target date, `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: MarkArgs) -> Result<()> {
    let date = super::parse_date(&args.date)?;
    let mut register = super::open_register()?;

    let status: Status = args.status.into();
    match register.mark(date, &args.id, status) {
        Ok(student) => {
            msg_success!(Message::Marked {
                name: student.name,
                status: status.to_string(),
            });
            Ok(())
        }
        Err(RegisterError::NotFound(id)) => {
            msg_error!(Message::StudentNotFound(id));
            Ok(())
        }
        Err(err) => Err(super::surface(err)),
    }
}
