//! Data export command.
//!
//! Exports either the full snapshot (JSON backup) or a single day's
//! register (CSV, JSON, or Excel).

use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, default_value = "snapshot")]
    data: ExportData,

    /// Output format (snapshots are always JSON)
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target date for day exports, `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let date = super::parse_date(&args.date)?;
    let register = super::open_register()?;

    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&register, args.data, date)?;

    Ok(())
}
