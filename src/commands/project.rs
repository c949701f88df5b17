use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::commands::active_user;
use crate::db::projects::{Project, Projects};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a new project
    Create {
        /// Project name
        name: String,
        /// Owning client ID
        #[arg(long)]
        client_id: Option<i64>,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
        /// Current hourly rate; new timers capture this as their own rate
        #[arg(short, long)]
        rate: Option<f64>,
        /// Billing currency code
        #[arg(long)]
        currency: Option<String>,
        /// Display color
        #[arg(long)]
        color: Option<String>,
    },
    /// List projects
    List {
        /// Filter by a name/description substring
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a project
    Edit {
        /// Project ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New owning client ID
        #[arg(long)]
        client_id: Option<i64>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New hourly rate
        #[arg(short, long)]
        rate: Option<f64>,
        /// New currency code
        #[arg(long)]
        currency: Option<String>,
        /// New display color
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: i64,
    },
}

pub fn cmd(args: ProjectArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    match args.command {
        ProjectCommand::Create {
            name,
            client_id,
            description,
            rate,
            currency,
            color,
        } => {
            let mut project = Project::new(user_id, name.clone());
            project.client_id = client_id;
            project.description = description;
            project.hourly_rate = rate;
            project.currency = currency;
            project.color = color;
            Projects::new()?.create(&project)?;
            msg_success!(Message::ProjectCreated(name));
            Ok(())
        }
        ProjectCommand::List { search } => {
            let projects = Projects::new()?.list(user_id, search.as_deref())?;
            if projects.is_empty() {
                msg_info!(Message::NoProjectsFound);
                return Ok(());
            }
            msg_print!(Message::ProjectListHeader, true);
            View::projects(&projects)
        }
        ProjectCommand::Edit {
            id,
            name,
            client_id,
            description,
            rate,
            currency,
            color,
        } => {
            let mut projects = Projects::new()?;
            let Some(mut project) = projects.get_by_id(user_id, id)? else {
                msg_error!(Message::ProjectNotFound(id.to_string()));
                return Ok(());
            };
            if let Some(name) = name {
                project.name = name;
            }
            project.client_id = client_id.or(project.client_id);
            project.description = description.or(project.description);
            project.hourly_rate = rate.or(project.hourly_rate);
            project.currency = currency.or(project.currency);
            project.color = color.or(project.color);
            projects.update(user_id, &project)?;
            msg_success!(Message::ProjectUpdated(project.name));
            Ok(())
        }
        ProjectCommand::Delete { id } => {
            let mut projects = Projects::new()?;
            let Some(project) = projects.get_by_id(user_id, id)? else {
                msg_error!(Message::ProjectNotFound(id.to_string()));
                return Ok(());
            };
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete project '{}'?", project.name))
                .default(false)
                .interact()?;
            if confirmed {
                projects.delete(user_id, id)?;
                msg_success!(Message::ProjectDeleted(project.name));
            }
            Ok(())
        }
    }
}
