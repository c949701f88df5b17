//! Report export command.
//!
//! Fetches the same filtered snapshot the report command uses and hands it
//! to the exporter. The artifact gets a unique name under the reports
//! directory (or an explicit `--output` path); the command prints the path
//! and leaves the file's lifetime to the caller.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use crate::commands::{active_user, resolve_report_filter};
use crate::db::timers::Timers;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the report
    #[arg(value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; defaults to a unique name under the
    /// reports directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First report day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last report day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Restrict to these project IDs
    #[arg(long = "project-id")]
    project_ids: Vec<i64>,
    /// Restrict to these tag IDs
    #[arg(long = "tag-id")]
    tag_ids: Vec<i64>,
    /// Restrict to these client IDs
    #[arg(long = "client-id")]
    client_ids: Vec<i64>,
    /// Use a saved filter preset instead of explicit filters
    #[arg(long)]
    filter: Option<String>,

    /// Flat rate for the Excel amount column; defaults to the configured
    /// rate
    #[arg(short, long)]
    rate: Option<f64>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    let filter = resolve_report_filter(
        user_id,
        args.filter.as_deref(),
        args.from,
        args.to,
        args.project_ids,
        args.tag_ids,
        args.client_ids,
    )?;
    let records = Timers::new()?.fetch_for_report(user_id, &filter)?;

    let rate = args.rate.or(Config::read()?.default_hourly_rate).unwrap_or(0.0);

    msg_info!(Message::ExportingReport(format!("{:?}", args.format)));
    let exporter = Exporter::new(args.format, args.output)?;
    let path = exporter.export(&records, rate)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
