use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::libs::formatter::duration_hours;

/// A tracked interval of billable work.
///
/// The hourly rate is captured when the timer is created and never follows
/// the project's current rate, so historical earnings stay stable when
/// project rates change. A timer without an end time is running.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: Option<i64>,
    pub user_id: i64,
    pub project_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub description: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub hourly_rate: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Timer {
    pub fn new(user_id: i64, start_time: NaiveDateTime) -> Self {
        Timer {
            id: None,
            user_id,
            project_id: None,
            tag_id: None,
            description: None,
            start_time,
            end_time: None,
            hourly_rate: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Project reference carried on a timer snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
    pub client: Option<ClientRef>,
}

/// Client reference carried through a timer's project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRef {
    pub id: i64,
    pub name: String,
}

/// Tag reference carried on a timer snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    pub id: i64,
    pub name: String,
}

/// Read-only timer projection consumed by the aggregation engine and the
/// exporters: one user's timers with project, client, and tag expanded.
///
/// Duration is always derived from `end_time - start_time`; the store keeps
/// no duration column so there is nothing stale to trust. Timestamps are
/// naive UTC, so calendar truncation of `start_time` is UTC date truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub hourly_rate: Option<f64>,
    pub user_email: Option<String>,
    pub project: Option<ProjectRef>,
    pub tag: Option<TagRef>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl TimerRecord {
    /// Elapsed time of a closed timer. Open timers have no duration and
    /// contribute nothing to any aggregation.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Duration in decimal hours, unrounded; 0.0 for open timers.
    pub fn hours(&self) -> f64 {
        self.duration().map(|d| duration_hours(&d)).unwrap_or(0.0)
    }

    /// Earnings in the entry's captured rate, unrounded; 0.0 when the rate
    /// is absent or the timer is open.
    pub fn earnings(&self) -> f64 {
        self.hours() * self.hourly_rate.unwrap_or(0.0)
    }
}
