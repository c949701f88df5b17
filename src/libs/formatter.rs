//! Duration and number formatting used at output boundaries.
//!
//! Reports and exports display the same value three ways: as `HH:MM:SS`
//! wall-clock text, as decimal hours, and as money. Internal accumulation
//! always runs on unrounded values; these helpers are applied only when a
//! number leaves the engine for a table cell, a CSV field, or a worksheet.
//!
//! ## Format Specifications
//!
//! - Durations render as `HH:MM:SS` with zero-padded components; negative
//!   durations clamp to `00:00:00`.
//! - Decimal hours and money round to 2 places, half away from zero.
//!
//! ## Examples
//!
//! ```rust
//! use tempus::libs::formatter::{format_hms, round2};
//! use chrono::Duration;
//!
//! assert_eq!(format_hms(&(Duration::hours(2) + Duration::minutes(30))), "02:30:00");
//! assert_eq!(round2(77.77777), 77.78);
//! ```

use chrono::Duration;

/// Formats a duration as zero-padded `HH:MM:SS`.
///
/// Negative durations are treated as zero so stray clock skew never renders
/// as a nonsense value.
pub fn format_hms(duration: &Duration) -> String {
    let secs = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a duration to decimal hours, unrounded.
pub fn duration_hours(duration: &Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}
