//! Time aggregation engine for reports and grouped timer views.
//!
//! Every operation here is a single pass over a caller-scoped snapshot of
//! [`TimerRecord`]s: the store has already restricted the set to one user
//! and the requested date/project/tag/client scope, and this module only
//! folds that snapshot into grouped or totaled structures. Nothing is
//! mutated and nothing is fetched, so running the same aggregation twice
//! over the same input yields identical output.
//!
//! ## Accumulation Rules
//!
//! - Open timers (no end time) are skipped by every aggregation: they add
//!   no hours, no earnings, and no group rows.
//! - Hours and earnings accumulate unrounded; rounding to 2 decimals
//!   happens once, when an output struct is built.
//! - Group percentages are shares of the filtered total. A zero total
//!   yields 0 for every percentage rather than a division error.
//!
//! ## Grouping Keys
//!
//! Grouping accumulates into ordered maps keyed by calendar date, week
//! start, or entity id, so each operation stays a single pass and the
//! output order falls out of the key order: weeks and days-within-weeks
//! descending (most recent first), report day rows ascending, entity rows
//! ascending by id.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::libs::calendar::{days_in_range, week_end, week_start};
use crate::libs::formatter::round2;
use crate::libs::timer::TimerRecord;

/// One calendar day of timers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    pub timers: Vec<TimerRecord>,
}

/// One Sunday-to-Saturday week of timers, split into day groups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup {
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    /// Sum of closed-timer durations in decimal hours, rounded to 2 places.
    pub total_hours: f64,
    /// Days sorted descending; each day's timers keep their input order.
    pub days: Vec<DayGroup>,
}

/// Hour total and share for one project, tag, or client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTotal {
    pub id: i64,
    pub name: String,
    pub total_hours: f64,
    pub percentage: f64,
}

/// Hours, earnings, and share for one report day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotal {
    pub date: NaiveDate,
    pub hours: f64,
    pub earnings: f64,
    pub percentage: f64,
}

/// Aggregated report over one user's filtered timers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub by_project: Vec<EntityTotal>,
    pub by_tag: Vec<EntityTotal>,
    pub by_client: Vec<EntityTotal>,
    pub by_day: Vec<DayTotal>,
}

/// Partitions timers by the UTC calendar date of their start time.
///
/// Days are ordered descending (most recent first), matching the list
/// convention of the weekly view. Open timers are grouped like any other
/// record; only duration math excludes them.
pub fn group_by_day(timers: Vec<TimerRecord>) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<TimerRecord>> = BTreeMap::new();
    for timer in timers {
        by_date.entry(timer.start_time.date()).or_default().push(timer);
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, timers)| DayGroup { date, timers })
        .collect()
}

/// Partitions timers into weeks, then into days within each week.
///
/// Weeks are keyed by their Sunday start and sorted descending, days within
/// a week sort descending as well. Each week carries the rounded sum of its
/// closed-timer hours.
pub fn group_by_week(timers: Vec<TimerRecord>) -> Vec<WeekGroup> {
    let mut by_week: BTreeMap<NaiveDate, BTreeMap<NaiveDate, Vec<TimerRecord>>> = BTreeMap::new();
    for timer in timers {
        let date = timer.start_time.date();
        let week_key = week_start(date).date();
        by_week.entry(week_key).or_default().entry(date).or_default().push(timer);
    }

    by_week
        .into_iter()
        .rev()
        .map(|(week_key, days)| {
            let total: f64 = days.values().flatten().map(TimerRecord::hours).sum();
            WeekGroup {
                week_start: week_start(week_key),
                week_end: week_end(week_key),
                total_hours: round2(total),
                days: days.into_iter().rev().map(|(date, timers)| DayGroup { date, timers }).collect(),
            }
        })
        .collect()
}

/// Builds the aggregate report over a filtered timer snapshot.
///
/// When both range bounds are given, `by_day` carries exactly one row per
/// calendar day of `[from, to]` inclusive, pre-seeded to zero before
/// accumulation; otherwise only days with activity appear. The percentage
/// denominator is the unrounded hour total accumulated from the entries
/// themselves, so zero-activity seed days dilute nothing.
pub fn build_report(timers: &[TimerRecord], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Report {
    let mut total_hours = 0.0;
    let mut total_earnings = 0.0;
    let mut by_project: BTreeMap<i64, (String, f64)> = BTreeMap::new();
    let mut by_tag: BTreeMap<i64, (String, f64)> = BTreeMap::new();
    let mut by_client: BTreeMap<i64, (String, f64)> = BTreeMap::new();
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    if let (Some(from), Some(to)) = (from, to) {
        for date in days_in_range(from, to) {
            by_day.insert(date, (0.0, 0.0));
        }
    }

    for timer in timers {
        // Open timers contribute nothing anywhere.
        if timer.end_time.is_none() {
            continue;
        }
        let hours = timer.hours();
        let earnings = timer.earnings();
        total_hours += hours;
        total_earnings += earnings;

        if let Some(project) = &timer.project {
            let entry = by_project.entry(project.id).or_insert_with(|| (project.name.clone(), 0.0));
            entry.1 += hours;
            if let Some(client) = &project.client {
                let entry = by_client.entry(client.id).or_insert_with(|| (client.name.clone(), 0.0));
                entry.1 += hours;
            }
        }
        if let Some(tag) = &timer.tag {
            let entry = by_tag.entry(tag.id).or_insert_with(|| (tag.name.clone(), 0.0));
            entry.1 += hours;
        }

        let day = by_day.entry(timer.start_time.date()).or_insert((0.0, 0.0));
        day.0 += hours;
        day.1 += earnings;
    }

    let entity_totals = |map: BTreeMap<i64, (String, f64)>| -> Vec<EntityTotal> {
        map.into_iter()
            .map(|(id, (name, hours))| EntityTotal {
                id,
                name,
                total_hours: round2(hours),
                percentage: percentage_of(hours, total_hours),
            })
            .collect()
    };

    Report {
        total_hours: round2(total_hours),
        total_earnings: round2(total_earnings),
        by_project: entity_totals(by_project),
        by_tag: entity_totals(by_tag),
        by_client: entity_totals(by_client),
        by_day: by_day
            .into_iter()
            .map(|(date, (hours, earnings))| DayTotal {
                date,
                hours: round2(hours),
                earnings: round2(earnings),
                percentage: percentage_of(hours, total_hours),
            })
            .collect(),
    }
}

/// Share of `part` in `total` as a percentage rounded to 2 places; 0 when
/// the total is zero.
fn percentage_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        round2(part / total * 100.0)
    } else {
        0.0
    }
}
