#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use tempus::libs::calendar::{days_in_range, week_end, week_start};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2025-01-06 is a Monday; its week starts Sunday 2025-01-05.
        let start = week_start(date(2025, 1, 6));
        assert_eq!(start.date(), date(2025, 1, 5));
        assert_eq!(start.time().num_seconds_from_midnight(), 0);

        // A Sunday is its own week start.
        assert_eq!(week_start(date(2025, 1, 5)).date(), date(2025, 1, 5));

        // A Saturday belongs to the week that started six days earlier.
        assert_eq!(week_start(date(2025, 1, 11)).date(), date(2025, 1, 5));
    }

    #[test]
    fn test_week_ends_on_saturday() {
        let end = week_end(date(2025, 1, 6));
        assert_eq!(end.date(), date(2025, 1, 11));
        assert_eq!(end.time().hour(), 23);
        assert_eq!(end.time().minute(), 59);
        assert_eq!(end.time().second(), 59);
        assert_eq!(end.time().nanosecond(), 999_000_000);
    }

    #[test]
    fn test_week_spanning_year_boundary() {
        // 2025-01-01 is a Wednesday; its week runs 2024-12-29 .. 2025-01-04.
        assert_eq!(week_start(date(2025, 1, 1)).date(), date(2024, 12, 29));
        assert_eq!(week_end(date(2025, 1, 1)).date(), date(2025, 1, 4));

        // The tail of December lands in the same week.
        assert_eq!(week_start(date(2024, 12, 31)).date(), date(2024, 12, 29));
    }

    #[test]
    fn test_week_spanning_month_boundary() {
        // 2025-04-30 is a Wednesday; week runs 2025-04-27 .. 2025-05-03.
        assert_eq!(week_start(date(2025, 4, 30)).date(), date(2025, 4, 27));
        assert_eq!(week_end(date(2025, 4, 30)).date(), date(2025, 5, 3));
    }

    #[test]
    fn test_days_in_range_inclusive() {
        let days: Vec<_> = days_in_range(date(2025, 1, 30), date(2025, 2, 2)).collect();
        assert_eq!(days, vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]);
    }

    #[test]
    fn test_days_in_range_single_day() {
        let days: Vec<_> = days_in_range(date(2025, 1, 6), date(2025, 1, 6)).collect();
        assert_eq!(days, vec![date(2025, 1, 6)]);
    }

    #[test]
    fn test_days_in_range_empty_when_inverted() {
        assert_eq!(days_in_range(date(2025, 1, 7), date(2025, 1, 6)).count(), 0);
    }
}
