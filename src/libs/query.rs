//! Typed query parameters for list and report endpoints.
//!
//! The store only accepts an enumerated set of sortable fields, each mapped
//! to a fixed SQL expression. Unrecognized field names are rejected as
//! validation errors instead of being passed through to the database, and
//! sort directions are typed rather than interpolated.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::libs::error::AppError;
use crate::libs::messages::Message;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// The sortable fields of the timer list endpoint, each bound to a concrete
/// column of the joined timer query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimerSortField {
    StartTime,
    EndTime,
    Description,
    CreatedAt,
    UpdatedAt,
    ProjectName,
}

impl TimerSortField {
    pub fn column(&self) -> &'static str {
        match self {
            TimerSortField::StartTime => "t.start_time",
            TimerSortField::EndTime => "t.end_time",
            TimerSortField::Description => "t.description",
            TimerSortField::CreatedAt => "t.created_at",
            TimerSortField::UpdatedAt => "t.updated_at",
            TimerSortField::ProjectName => "p.name",
        }
    }
}

impl FromStr for TimerSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start_time" | "startTime" => Ok(TimerSortField::StartTime),
            "end_time" | "endTime" => Ok(TimerSortField::EndTime),
            "description" => Ok(TimerSortField::Description),
            "created_at" | "createdAt" => Ok(TimerSortField::CreatedAt),
            "updated_at" | "updatedAt" => Ok(TimerSortField::UpdatedAt),
            "project_name" | "project.name" => Ok(TimerSortField::ProjectName),
            other => Err(AppError::Validation(format!("Unknown sort field '{}'", other))),
        }
    }
}

/// Zero-based pagination window.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> u32 {
        self.page * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, page_size: 10 }
    }
}

/// One page of results together with the total row count, fetched in the
/// same transaction as the rows themselves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
}

/// Parameters of the timer list endpoint: free-text search on description,
/// typed sort, pagination.
#[derive(Debug, Clone, Default)]
pub struct TimerQuery {
    pub search: Option<String>,
    pub sort: Option<(TimerSortField, SortOrder)>,
    pub page: Option<PageRequest>,
}

/// Report scope: an optional date range plus optional id sets for projects,
/// tags, and clients. Empty id sets mean "no restriction".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub project_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub client_ids: Vec<i64>,
}

impl ReportFilter {
    /// Rejects an inverted date range. Open-ended ranges are valid.
    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            if from > to {
                return Err(AppError::validation(Message::InvalidDateRange(from.to_string(), to.to_string())));
            }
        }
        Ok(())
    }
}
