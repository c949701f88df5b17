//! Aggregate report command and saved filter management.
//!
//! Builds the report the way the engine sees it: the store returns one
//! filtered snapshot of the user's timers with relations expanded, and the
//! aggregation engine folds it into totals and by-project/tag/client/day
//! breakdowns. `--json` emits the raw report structure; the default output
//! renders console tables.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::commands::{active_user, resolve_report_filter};
use crate::db::report_filters::{ReportFilters, SavedReportFilter};
use crate::db::timers::Timers;
use crate::libs::aggregate::build_report;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct ReportArgs {
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
    /// Save the given filters as a named preset
    #[arg(long)]
    save: Option<String>,
    /// Emit the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ReportCommand>,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// List saved filter presets
    Filters,
    /// Delete a saved filter preset
    DeleteFilter {
        /// Filter ID
        id: i64,
    },
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    match args.command {
        Some(ReportCommand::Filters) => return handle_list_filters(user_id),
        Some(ReportCommand::DeleteFilter { id }) => return handle_delete_filter(user_id, id),
        None => {}
    }

    let filter = resolve_report_filter(
        user_id,
        args.filter.as_deref(),
        args.from,
        args.to,
        args.project_ids,
        args.tag_ids,
        args.client_ids,
    )?;

    if let Some(name) = args.save {
        let id = ReportFilters::new()?.create(&SavedReportFilter::new(user_id, name.clone(), &filter))?;
        tracing::debug!(filter_id = id, "saved report filter");
        msg_success!(Message::ReportFilterSaved(name));
    }

    let records = Timers::new()?.fetch_for_report(user_id, &filter)?;
    let report = build_report(&records, filter.from_date, filter.to_date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if records.is_empty() {
        msg_info!(Message::NoTimersForReport);
    }
    msg_print!(Message::ReportHeader(format_range(filter.from_date, filter.to_date)), true);
    View::report(&report)
}

fn handle_list_filters(user_id: i64) -> Result<()> {
    let filters = ReportFilters::new()?.list(user_id)?;
    if filters.is_empty() {
        msg_info!(Message::NoSavedFilters);
        return Ok(());
    }
    msg_print!(Message::SavedFiltersHeader, true);
    View::report_filters(&filters)
}

fn handle_delete_filter(user_id: i64, id: i64) -> Result<()> {
    ReportFilters::new()?.delete(user_id, id)?;
    msg_success!(Message::ReportFilterDeleted(id.to_string()));
    Ok(())
}

fn format_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{} .. {}", from, to),
        (Some(from), None) => format!("from {}", from),
        (None, Some(to)) => format!("until {}", to),
        (None, None) => "(all time)".to_string(),
    }
}
