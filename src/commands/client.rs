use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::commands::active_user;
use crate::db::clients::{Client, Clients};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct ClientArgs {
    #[command(subcommand)]
    command: ClientCommand,
}

#[derive(Debug, Subcommand)]
enum ClientCommand {
    /// Create a new client
    Create {
        /// Client name
        name: String,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List clients
    List {
        /// Filter by a name/email substring
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a client
    Edit {
        /// Client ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a client
    Delete {
        /// Client ID
        id: i64,
    },
}

pub fn cmd(args: ClientArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    match args.command {
        ClientCommand::Create { name, email } => {
            let mut clients = Clients::new()?;
            clients.create(&Client::new(user_id, name.clone(), email))?;
            msg_success!(Message::ClientCreated(name));
            Ok(())
        }
        ClientCommand::List { search } => {
            let clients = Clients::new()?.list(user_id, search.as_deref())?;
            if clients.is_empty() {
                msg_info!(Message::NoClientsFound);
                return Ok(());
            }
            msg_print!(Message::ClientListHeader, true);
            View::clients(&clients)
        }
        ClientCommand::Edit { id, name, email } => {
            let mut clients = Clients::new()?;
            let Some(current) = clients.get_by_id(user_id, id)? else {
                msg_error!(Message::ClientNotFound(id.to_string()));
                return Ok(());
            };
            let name = name.unwrap_or(current.name);
            let email = email.or(current.email);
            clients.update(user_id, id, &name, email.as_deref())?;
            msg_success!(Message::ClientUpdated(name));
            Ok(())
        }
        ClientCommand::Delete { id } => {
            let mut clients = Clients::new()?;
            let Some(client) = clients.get_by_id(user_id, id)? else {
                msg_error!(Message::ClientNotFound(id.to_string()));
                return Ok(());
            };
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete client '{}'?", client.name))
                .default(false)
                .interact()?;
            if confirmed {
                clients.delete(user_id, id)?;
                msg_success!(Message::ClientDeleted(client.name));
            }
            Ok(())
        }
    }
}
