pub mod client;
pub mod export;
pub mod init;
pub mod project;
pub mod report;
pub mod tag;
pub mod timer;
pub mod user;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::db::report_filters::ReportFilters;
use crate::db::users::{User, Users};
use crate::libs::config::Config;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::query::ReportFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage users")]
    User(user::UserArgs),
    #[command(about = "Manage clients")]
    Client(client::ClientArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Manage tags")]
    Tag(tag::TagArgs),
    #[command(about = "Track and list timers")]
    Timer(timer::TimerArgs),
    #[command(about = "Build an aggregate time report")]
    Report(report::ReportArgs),
    #[command(about = "Export a report to CSV or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Client(args) => client::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Tag(args) => tag::cmd(args),
            Commands::Timer(args) => timer::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Resolves the user the CLI acts as from configuration. Every command that
/// touches user-owned records goes through here, so store queries are
/// always scoped to one user.
pub(crate) fn active_user() -> Result<User> {
    let config = Config::read()?;
    let email = config.active_user.ok_or_else(|| AppError::validation(Message::NoActiveUser))?;
    Ok(Users::new()?.require_by_email(&email)?)
}

/// Builds the report scope from either a saved filter preset or explicit
/// arguments. The two report-consuming commands (report, export) share this
/// resolution so presets behave identically in both.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_report_filter(
    user_id: i64,
    saved: Option<&str>,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
    project_ids: Vec<i64>,
    tag_ids: Vec<i64>,
    client_ids: Vec<i64>,
) -> Result<ReportFilter> {
    let filter = match saved {
        Some(name) => ReportFilters::new()?
            .get_by_name(user_id, name)?
            .ok_or_else(|| AppError::not_found(Message::ReportFilterNotFound(name.to_string())))?
            .to_filter(),
        None => ReportFilter {
            from_date: from,
            to_date: to,
            project_ids,
            tag_ids,
            client_ids,
        },
    };
    filter.validate()?;
    Ok(filter)
}
