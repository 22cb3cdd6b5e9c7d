//! Bulk marking command: every student matching the filters is marked
//! present with one shared timestamp.

use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkAllArgs {
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

pub fn cmd(args: MarkAllArgs) -> Result<()> {
    let date = super::parse_date(&args.date)?;
    let mut register = super::open_register()?;

    let count = register
        .mark_all_present(date, &args.search, &args.class)
        .map_err(super::surface)?;
    if count == 0 {
        msg_info!(Message::NoStudentsMatchFilter);
    } else {
        msg_success!(Message::MarkedAllPresent(count));
    }
    Ok(())
}
