//! Interactive configuration setup.
//!
//! Prompts for the acting user and the default billing rate, persists the
//! configuration, and creates the user record when it does not exist yet so
//! a fresh install is usable right after `tempus init`.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::db::users::{User, Users};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_args: InitArgs) -> Result<()> {
    let config = Config::read().unwrap_or_default().init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    if let Some(email) = &config.active_user {
        let mut users = Users::new()?;
        if users.get_by_email(email)?.is_none() {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUserName.to_string())
                .interact_text()?;
            users.create(&User::new(name, email.clone()))?;
            msg_success!(Message::UserCreated(email.clone()));
        }
    }

    Ok(())
}
