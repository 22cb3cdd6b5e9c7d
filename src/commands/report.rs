//! Daily register display command: the per-student table for one date
//! plus its aggregate statistics.

use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Target date, `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
    /// Search text matched against id and name
    #[arg(short, long, default_value = "")]
    search: String,
    /// Exact class filter
    #[arg(short, long, default_value = "")]
    class: String,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let date = super::parse_date(&args.date)?;
    let register = super::open_register()?;

    let rows = register.day_rows(date, &args.search, &args.class);
    msg_print!(Message::RegisterHeader(date.to_string()), true);
    if rows.is_empty() {
        msg_info!(Message::NoStudentsMatchFilter);
        return Ok(());
    }

    View::register(&rows);
    View::stats(&register.stats_for(date, &args.search, &args.class));
    Ok(())
}
