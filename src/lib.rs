//! # Tempus - Billable Time Tracking
//!
//! A multi-user command-line utility for tracking billable time against
//! projects, clients and tags, building aggregate reports, and exporting
//! them to CSV or Excel.
//!
//! ## Features
//!
//! - **Timer Tracking**: Start, stop, duplicate and edit timers with per-entry hourly rates
//! - **Project Organization**: Projects, clients, and tags scoped per user
//! - **Report Engine**: Hour/earning aggregation by day, week, project, tag, and client
//! - **Data Export**: CSV reports and styled Excel workbooks
//! - **Saved Filters**: Reusable report filter presets
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempus::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
