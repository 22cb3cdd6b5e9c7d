//! Student registration command.
//!
//! Fields can be given as flags; whatever is missing gets prompted
//! interactively.

use crate::libs::error::RegisterError;
use crate::libs::messages::Message;
use crate::libs::student::NewStudent;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Unique student id (prompted when omitted)
    #[arg(long)]
    id: Option<String>,
    /// Full name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,
    /// Class label, e.g. "Grade 10A"
    #[arg(long)]
    class: Option<String>,
    /// Contact email
    #[arg(long)]
    email: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let theme = ColorfulTheme::default();
    let id = match args.id {
        Some(id) => id,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptStudentId.to_string())
            .interact_text()?,
    };
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptStudentName.to_string())
            .interact_text()?,
    };
    let class = match args.class {
        Some(class) => class,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptStudentClass.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptStudentEmail.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let mut register = super::open_register()?;
    match register.add_student(NewStudent { id, name, class, email }) {
        Ok(student) => {
            msg_success!(Message::StudentAdded(student.name));
            Ok(())
        }
        Err(RegisterError::DuplicateId(id)) => {
            msg_error!(Message::StudentIdExists(id));
            Ok(())
        }
        Err(RegisterError::InvalidInput(reason)) => {
            msg_error!(Message::InvalidStudentInput(reason));
            Ok(())
        }
        Err(err) => Err(super::surface(err)),
    }
}
