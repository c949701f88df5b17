//! Timer lifecycle commands: start/stop, manual entry, editing, listing,
//! and the weekly grouped view.
//!
//! All timestamps are recorded in UTC; the report engine's calendar-date
//! grouping relies on that convention. Starting a timer captures the
//! hourly rate once — explicitly from `--rate`, otherwise from the
//! project's current rate — so later project rate changes never rewrite
//! historical earnings.

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::commands::active_user;
use crate::db::projects::Projects;
use crate::db::timers::Timers;
use crate::libs::aggregate::group_by_week;
use crate::libs::formatter::format_hms;
use crate::libs::messages::Message;
use crate::libs::query::{PageRequest, SortOrder, TimerQuery, TimerSortField};
use crate::libs::timer::Timer;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    command: TimerCommand,
}

#[derive(Debug, Subcommand)]
enum TimerCommand {
    /// Start a new timer
    Start {
        /// What is being worked on
        description: Option<String>,
        /// Associated project ID
        #[arg(long)]
        project_id: Option<i64>,
        /// Associated tag ID
        #[arg(long)]
        tag_id: Option<i64>,
        /// Hourly rate; defaults to the project's current rate
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// Stop the running timer
    Stop,
    /// Show the running timer
    Running,
    /// Add a closed timer manually
    Add {
        /// Start time, e.g. "2025-01-06 09:00"
        #[arg(long)]
        start: String,
        /// End time, e.g. "2025-01-06 11:00"
        #[arg(long)]
        end: String,
        /// What was worked on
        description: Option<String>,
        /// Associated project ID
        #[arg(long)]
        project_id: Option<i64>,
        /// Associated tag ID
        #[arg(long)]
        tag_id: Option<i64>,
        /// Hourly rate; defaults to the project's current rate
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// Edit a timer
    Edit {
        /// Timer ID
        id: i64,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New start time
        #[arg(long)]
        start: Option<String>,
        /// New end time
        #[arg(long)]
        end: Option<String>,
        /// New project ID
        #[arg(long)]
        project_id: Option<i64>,
        /// New tag ID
        #[arg(long)]
        tag_id: Option<i64>,
        /// New hourly rate
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// Delete a timer
    Delete {
        /// Timer ID
        id: i64,
    },
    /// Duplicate a timer
    Duplicate {
        /// Timer ID
        id: i64,
    },
    /// List timers with search, sort, and pagination
    List {
        /// Filter by a description substring
        #[arg(short, long)]
        search: Option<String>,
        /// Field to sort by
        #[arg(long, value_enum)]
        sort_field: Option<TimerSortField>,
        /// Sort direction
        #[arg(long, value_enum, default_value = "asc")]
        sort_order: SortOrder,
        /// Page number (0-based)
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    /// Show timers grouped by week and day
    Weekly {
        /// Page number (0-based)
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size
        #[arg(long, default_value_t = 50)]
        page_size: u32,
    },
}

pub fn cmd(args: TimerArgs) -> Result<()> {
    let user = active_user()?;
    let user_id = user.id.unwrap_or(0);

    match args.command {
        TimerCommand::Start {
            description,
            project_id,
            tag_id,
            rate,
        } => handle_start(user_id, description, project_id, tag_id, rate),
        TimerCommand::Stop => handle_stop(user_id),
        TimerCommand::Running => handle_running(user_id),
        TimerCommand::Add {
            start,
            end,
            description,
            project_id,
            tag_id,
            rate,
        } => handle_add(user_id, start, end, description, project_id, tag_id, rate),
        TimerCommand::Edit {
            id,
            description,
            start,
            end,
            project_id,
            tag_id,
            rate,
        } => handle_edit(user_id, id, description, start, end, project_id, tag_id, rate),
        TimerCommand::Delete { id } => handle_delete(user_id, id),
        TimerCommand::Duplicate { id } => handle_duplicate(user_id, id),
        TimerCommand::List {
            search,
            sort_field,
            sort_order,
            page,
            page_size,
        } => handle_list(user_id, search, sort_field, sort_order, page, page_size),
        TimerCommand::Weekly { page, page_size } => handle_weekly(user_id, page, page_size),
    }
}

fn handle_start(user_id: i64, description: Option<String>, project_id: Option<i64>, tag_id: Option<i64>, rate: Option<f64>) -> Result<()> {
    let mut timers = Timers::new()?;
    if let Some(running) = timers.running(user_id)? {
        msg_error!(Message::TimerAlreadyRunning(running.id.unwrap_or(0)));
        return Ok(());
    }

    let mut timer = Timer::new(user_id, Utc::now().naive_utc());
    timer.description = description.clone();
    timer.project_id = project_id;
    timer.tag_id = tag_id;
    timer.hourly_rate = resolve_rate(user_id, rate, project_id)?;
    timers.insert(&timer)?;

    msg_success!(Message::TimerStarted(description.unwrap_or_else(|| "(no description)".to_string())));
    Ok(())
}

fn handle_stop(user_id: i64) -> Result<()> {
    let mut timers = Timers::new()?;
    let Some(mut timer) = timers.running(user_id)? else {
        msg_info!(Message::NoRunningTimer);
        return Ok(());
    };

    let end = Utc::now().naive_utc();
    timer.end_time = Some(end);
    timers.update(user_id, &timer)?;

    msg_success!(Message::TimerStopped(format_hms(&(end - timer.start_time))));
    Ok(())
}

fn handle_running(user_id: i64) -> Result<()> {
    let Some(timer) = Timers::new()?.running(user_id)? else {
        msg_info!(Message::NoRunningTimer);
        return Ok(());
    };

    msg_print!(Message::RunningTimerHeader, true);
    let elapsed = Utc::now().naive_utc() - timer.start_time;
    println!(
        "#{} {} (started {}, running {})",
        timer.id.unwrap_or(0),
        timer.description.as_deref().unwrap_or("(no description)"),
        timer.start_time.format("%Y-%m-%d %H:%M"),
        format_hms(&elapsed)
    );
    Ok(())
}

fn handle_add(
    user_id: i64,
    start: String,
    end: String,
    description: Option<String>,
    project_id: Option<i64>,
    tag_id: Option<i64>,
    rate: Option<f64>,
) -> Result<()> {
    let mut timer = Timer::new(user_id, parse_datetime(&start)?);
    timer.end_time = Some(parse_datetime(&end)?);
    timer.description = description;
    timer.project_id = project_id;
    timer.tag_id = tag_id;
    timer.hourly_rate = resolve_rate(user_id, rate, project_id)?;

    let id = Timers::new()?.insert(&timer)?;
    msg_success!(Message::TimerCreated(id));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    user_id: i64,
    id: i64,
    description: Option<String>,
    start: Option<String>,
    end: Option<String>,
    project_id: Option<i64>,
    tag_id: Option<i64>,
    rate: Option<f64>,
) -> Result<()> {
    let mut timers = Timers::new()?;
    let mut timer = timers.require(user_id, id)?;

    timer.description = description.or(timer.description);
    if let Some(start) = start {
        timer.start_time = parse_datetime(&start)?;
    }
    if let Some(end) = end {
        timer.end_time = Some(parse_datetime(&end)?);
    }
    timer.project_id = project_id.or(timer.project_id);
    timer.tag_id = tag_id.or(timer.tag_id);
    timer.hourly_rate = rate.or(timer.hourly_rate);

    timers.update(user_id, &timer)?;
    msg_success!(Message::TimerUpdated(id));
    Ok(())
}

fn handle_delete(user_id: i64, id: i64) -> Result<()> {
    let mut timers = Timers::new()?;
    timers.require(user_id, id)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTimer(id).to_string())
        .default(false)
        .interact()?;
    if confirmed {
        timers.delete(user_id, id)?;
        msg_success!(Message::TimerDeleted(id));
    }
    Ok(())
}

fn handle_duplicate(user_id: i64, id: i64) -> Result<()> {
    let new_id = Timers::new()?.duplicate(user_id, id)?;
    msg_success!(Message::TimerDuplicated(new_id));
    Ok(())
}

fn handle_list(
    user_id: i64,
    search: Option<String>,
    sort_field: Option<TimerSortField>,
    sort_order: SortOrder,
    page: u32,
    page_size: u32,
) -> Result<()> {
    let query = TimerQuery {
        search,
        sort: sort_field.map(|field| (field, sort_order)),
        page: Some(PageRequest::new(page, page_size)),
    };
    let page = Timers::new()?.fetch_page(user_id, &query)?;
    if page.items.is_empty() {
        msg_info!(Message::NoTimersFound);
        return Ok(());
    }

    msg_print!(Message::TimerListHeader, true);
    View::timers(&page.items)?;
    println!("Page {} ({} of {} timers)", page.page, page.items.len(), page.total);
    Ok(())
}

fn handle_weekly(user_id: i64, page: u32, page_size: u32) -> Result<()> {
    let query = TimerQuery {
        search: None,
        sort: Some((TimerSortField::StartTime, SortOrder::Desc)),
        page: Some(PageRequest::new(page, page_size)),
    };
    let page = Timers::new()?.fetch_page(user_id, &query)?;
    if page.items.is_empty() {
        msg_info!(Message::NoTimersFound);
        return Ok(());
    }

    msg_print!(Message::WeeklyHeader, true);
    View::weeks(&group_by_week(page.items))
}

/// An explicit rate wins; otherwise the project's current rate is captured.
fn resolve_rate(user_id: i64, rate: Option<f64>, project_id: Option<i64>) -> Result<Option<f64>> {
    if rate.is_some() {
        return Ok(rate);
    }
    match project_id {
        Some(id) => Ok(Projects::new()?.get_by_id(user_id, id)?.and_then(|p| p.hourly_rate)),
        None => Ok(None),
    }
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]` and the `T`-separated equivalent.
fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    Err(anyhow::anyhow!("Invalid date-time '{}', expected YYYY-MM-DD HH:MM", value))
}
