//! Roster listing command.

use crate::libs::messages::Message;
use crate::libs::student::Student;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text matched against id and name
    #[arg(short, long, default_value = "")]
    search: String,
    /// Exact class filter
    #[arg(short, long, default_value = "")]
    class: String,
    /// List the distinct classes instead of students
    #[arg(long)]
    classes: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let register = super::open_register()?;

    if args.classes {
        let classes = register.distinct_classes();
        if classes.is_empty() {
            msg_info!(Message::NoClassesRegistered);
            return Ok(());
        }
        View::classes(&classes);
        return Ok(());
    }

    if register.students().is_empty() {
        msg_info!(Message::RosterEmpty);
        return Ok(());
    }

    let students: Vec<Student> = register
        .filtered_students(&args.search, &args.class)
        .into_iter()
        .cloned()
        .collect();
    if students.is_empty() {
        msg_info!(Message::NoStudentsMatchFilter);
        return Ok(());
    }

    View::students(&students);
    Ok(())
}
