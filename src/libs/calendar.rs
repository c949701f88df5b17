//! Week boundary and date range helpers for the aggregation engine.
//!
//! Weeks run Sunday through Saturday: Sunday is day index 0, matching the
//! grouping convention used everywhere in the report engine. All functions
//! are pure date arithmetic with no I/O, and behave correctly across month
//! and year transitions.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Returns the Sunday of the week containing `date`, at 00:00:00.000.
pub fn week_start(date: NaiveDate) -> NaiveDateTime {
    let days_from_sunday = date.weekday().num_days_from_sunday() as i64;
    let sunday = date - Duration::days(days_from_sunday);
    sunday.and_hms_milli_opt(0, 0, 0, 0).unwrap()
}

/// Returns the Saturday of the week containing `date`, at 23:59:59.999.
pub fn week_end(date: NaiveDate) -> NaiveDateTime {
    let days_from_sunday = date.weekday().num_days_from_sunday() as i64;
    let saturday = date + Duration::days(6 - days_from_sunday);
    saturday.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Iterates every calendar date in `[from, to]` inclusive. Yields nothing
/// when `from > to`.
pub fn days_in_range(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(from), |d| Some(*d + Duration::days(1))).take_while(move |d| *d <= to)
}
