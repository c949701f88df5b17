use anyhow::Result;
use clap::{Args, Subcommand};

use crate::db::users::{User, Users};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Add a new user
    Add {
        /// Display name
        name: String,
        /// Unique email address
        email: String,
    },
    /// List all users
    List,
    /// Switch the user the CLI acts as
    Switch {
        /// Email of the user to act as
        email: String,
    },
}

pub fn cmd(args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Add { name, email } => handle_add(name, email),
        UserCommand::List => handle_list(),
        UserCommand::Switch { email } => handle_switch(email),
    }
}

fn handle_add(name: String, email: String) -> Result<()> {
    let mut users = Users::new()?;
    if users.get_by_email(&email)?.is_some() {
        msg_error!(Message::UserAlreadyExists(email));
        return Ok(());
    }

    users.create(&User::new(name, email.clone()))?;
    msg_success!(Message::UserCreated(email));
    Ok(())
}

fn handle_list() -> Result<()> {
    let users = Users::new()?.list()?;
    if users.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    msg_print!(Message::UserListHeader, true);
    View::users(&users)?;
    Ok(())
}

fn handle_switch(email: String) -> Result<()> {
    // Resolve first so a typo cannot point the config at a missing user.
    Users::new()?.require_by_email(&email)?;

    let mut config = Config::read()?;
    config.active_user = Some(email.clone());
    config.save()?;
    msg_success!(Message::ActiveUserSet(email));
    Ok(())
}
