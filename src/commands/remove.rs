//! Student removal command.
//!
//! Removal is destructive (it drops all attendance records for the
//! student across every date), so the confirmation happens here before
//! the core is invoked; the core itself assumes consent.

use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the student to remove
    #[arg(required = true)]
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: RemoveArgs) -> Result<()> {
    let mut register = super::open_register()?;

    let Some(student) = register.find_student(&args.id).cloned() else {
        msg_error!(Message::StudentNotFound(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveStudent(student.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::RemovalCancelled);
            return Ok(());
        }
    }

    register.remove_student(&args.id).map_err(super::surface)?;
    msg_success!(Message::StudentRemoved(student.name));
    Ok(())
}
