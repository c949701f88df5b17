//! Database layer for the tempus application.
//!
//! A SQLite persistence layer with one store struct per entity. Every
//! record is owned by a user and every query is scoped by `user_id`; the
//! stores raise identifiable not-found errors instead of silently matching
//! nothing when an id belongs to another user.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempus::db::timers::Timers;
//! use tempus::libs::query::ReportFilter;
//!
//! let mut timers = Timers::new()?;
//! let records = timers.fetch_for_report(1, &ReportFilter::default())?;
//! # Ok::<(), tempus::libs::error::AppError>(())
//! ```

/// Core database connection, setup, and schema bootstrap.
pub mod db;

/// Client records grouped under a user.
pub mod clients;

/// Billable projects with optional client association and rate metadata.
pub mod projects;

/// Saved report filter presets.
pub mod report_filters;

/// Organizational tags.
pub mod tags;

/// Timers and the filtered queries feeding reports and exports.
pub mod timers;

/// User accounts, the multi-tenancy anchor.
pub mod users;
