#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempus::libs::aggregate::{build_report, group_by_day, group_by_week};
    use tempus::libs::timer::{ClientRef, ProjectRef, TagRef, TimerRecord};

    fn ts(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        id: i64,
        start: &str,
        end: Option<&str>,
        rate: Option<f64>,
        project: Option<(i64, &str)>,
        client: Option<(i64, &str)>,
        tag: Option<(i64, &str)>,
    ) -> TimerRecord {
        TimerRecord {
            id,
            start_time: ts(start),
            end_time: end.map(ts),
            description: None,
            hourly_rate: rate,
            user_email: Some("dev@example.com".to_string()),
            project: project.map(|(pid, name)| ProjectRef {
                id: pid,
                name: name.to_string(),
                client: client.map(|(cid, cname)| ClientRef {
                    id: cid,
                    name: cname.to_string(),
                }),
            }),
            tag: tag.map(|(tid, name)| TagRef {
                id: tid,
                name: name.to_string(),
            }),
            created_at: None,
            updated_at: None,
        }
    }

    /// The three closed entries of the reference scenario: two on project A
    /// (rate 10) on 2025-01-06, one on project B (rate 20) on 2025-01-07.
    fn scenario() -> Vec<TimerRecord> {
        vec![
            record(1, "2025-01-06 09:00", Some("2025-01-06 11:00"), Some(10.0), Some((1, "A")), Some((1, "Acme")), None),
            record(2, "2025-01-06 13:00", Some("2025-01-06 14:30"), Some(10.0), Some((1, "A")), Some((1, "Acme")), None),
            record(3, "2025-01-07 09:00", Some("2025-01-07 10:00"), Some(20.0), Some((2, "B")), Some((2, "Globex")), None),
        ]
    }

    #[test]
    fn test_only_open_entries_yield_zero_totals() {
        let records = vec![
            record(1, "2025-01-06 09:00", None, Some(50.0), Some((1, "A")), None, Some((1, "dev"))),
            record(2, "2025-01-07 10:00", None, Some(50.0), Some((1, "A")), None, None),
        ];
        let report = build_report(&records, Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));

        assert_eq!(report.total_hours, 0.0);
        assert_eq!(report.total_earnings, 0.0);
        assert!(report.by_project.is_empty());
        assert!(report.by_tag.is_empty());
        for day in &report.by_day {
            assert_eq!(day.hours, 0.0);
            assert_eq!(day.percentage, 0.0);
        }
    }

    #[test]
    fn test_report_round_trip_scenario() {
        let report = build_report(&scenario(), Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));

        assert_eq!(report.total_hours, 4.5);
        assert_eq!(report.total_earnings, 55.0);

        assert_eq!(report.by_project.len(), 2);
        let a = &report.by_project[0];
        assert_eq!((a.id, a.name.as_str(), a.total_hours, a.percentage), (1, "A", 3.5, 77.78));
        let b = &report.by_project[1];
        assert_eq!((b.id, b.name.as_str(), b.total_hours, b.percentage), (2, "B", 1.0, 22.22));

        assert_eq!(report.by_day.len(), 2);
        assert_eq!(report.by_day[0].date, date(2025, 1, 6));
        assert_eq!(report.by_day[0].hours, 3.5);
        assert_eq!(report.by_day[0].earnings, 35.0);
        assert_eq!(report.by_day[1].date, date(2025, 1, 7));
        assert_eq!(report.by_day[1].hours, 1.0);
        assert_eq!(report.by_day[1].earnings, 20.0);
    }

    #[test]
    fn test_open_entry_changes_nothing() {
        let mut records = scenario();
        records.push(record(4, "2025-01-06 15:00", None, Some(100.0), Some((1, "A")), Some((1, "Acme")), None));

        let report = build_report(&records, Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));

        assert_eq!(report.total_hours, 4.5);
        assert_eq!(report.total_earnings, 55.0);
        assert_eq!(report.by_project[0].total_hours, 3.5);
        assert_eq!(report.by_day[0].hours, 3.5);
    }

    #[test]
    fn test_by_day_seeds_every_day_of_the_range() {
        let records = vec![record(1, "2025-01-03 09:00", Some("2025-01-03 11:00"), None, None, None, None)];
        let report = build_report(&records, Some(date(2025, 1, 1)), Some(date(2025, 1, 10)));

        assert_eq!(report.by_day.len(), 10);
        for (offset, day) in report.by_day.iter().enumerate() {
            assert_eq!(day.date, date(2025, 1, 1 + offset as u32));
        }

        // Zero-activity seed days do not dilute the percentage denominator.
        let active = report.by_day.iter().find(|d| d.date == date(2025, 1, 3)).unwrap();
        assert_eq!(active.hours, 2.0);
        assert_eq!(active.percentage, 100.0);
        let idle = report.by_day.iter().find(|d| d.date == date(2025, 1, 4)).unwrap();
        assert_eq!((idle.hours, idle.earnings, idle.percentage), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_and_client_sums_match_total() {
        let report = build_report(&scenario(), Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));

        let project_sum: f64 = report.by_project.iter().map(|e| e.total_hours).sum();
        let client_sum: f64 = report.by_client.iter().map(|e| e.total_hours).sum();
        assert!((project_sum - report.total_hours).abs() < 0.01);
        assert!((client_sum - report.total_hours).abs() < 0.01);
    }

    #[test]
    fn test_by_tag_accumulates_per_tag() {
        let records = vec![
            record(1, "2025-01-06 09:00", Some("2025-01-06 10:00"), None, None, None, Some((7, "deep-work"))),
            record(2, "2025-01-06 10:00", Some("2025-01-06 12:00"), None, None, None, Some((7, "deep-work"))),
            record(3, "2025-01-06 13:00", Some("2025-01-06 14:00"), None, None, None, Some((9, "meetings"))),
        ];
        let report = build_report(&records, None, None);

        assert_eq!(report.by_tag.len(), 2);
        assert_eq!(report.by_tag[0].id, 7);
        assert_eq!(report.by_tag[0].total_hours, 3.0);
        assert_eq!(report.by_tag[0].percentage, 75.0);
        assert_eq!(report.by_tag[1].id, 9);
        assert_eq!(report.by_tag[1].percentage, 25.0);
    }

    #[test]
    fn test_report_without_bounds_only_lists_active_days() {
        let report = build_report(&scenario(), None, None);
        assert_eq!(report.by_day.len(), 2);
        assert_eq!(report.total_hours, 4.5);
    }

    #[test]
    fn test_group_by_day_partitions_and_orders_descending() {
        let groups = group_by_day(scenario());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, date(2025, 1, 7));
        assert_eq!(groups[0].timers.len(), 1);
        assert_eq!(groups[1].date, date(2025, 1, 6));
        assert_eq!(groups[1].timers.len(), 2);
    }

    #[test]
    fn test_group_by_week_boundaries_and_totals() {
        // Sunday, Monday, and Saturday of the same week, plus the next Sunday.
        let records = vec![
            record(1, "2025-01-05 09:00", Some("2025-01-05 10:00"), None, None, None, None),
            record(2, "2025-01-06 09:00", Some("2025-01-06 11:00"), None, None, None, None),
            record(3, "2025-01-11 09:00", Some("2025-01-11 09:30"), None, None, None, None),
            record(4, "2025-01-12 09:00", Some("2025-01-12 10:00"), None, None, None, None),
        ];
        let weeks = group_by_week(records);

        assert_eq!(weeks.len(), 2);

        // Most recent week first.
        assert_eq!(weeks[0].week_start.date(), date(2025, 1, 12));
        assert_eq!(weeks[0].week_end.date(), date(2025, 1, 18));
        assert_eq!(weeks[0].total_hours, 1.0);

        let week = &weeks[1];
        assert_eq!(week.week_start.date(), date(2025, 1, 5));
        assert_eq!(week.week_end.date(), date(2025, 1, 11));
        assert_eq!(week.total_hours, 3.5);

        // Days within the week are sorted descending.
        let dates: Vec<_> = week.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 11), date(2025, 1, 6), date(2025, 1, 5)]);
    }

    #[test]
    fn test_week_total_skips_open_entries() {
        let records = vec![
            record(1, "2025-01-06 09:00", Some("2025-01-06 11:00"), None, None, None, None),
            record(2, "2025-01-06 12:00", None, None, None, None, None),
        ];
        let weeks = group_by_week(records);

        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].total_hours, 2.0);
        // The open entry still appears in its day group.
        assert_eq!(weeks[0].days[0].timers.len(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = scenario();
        let first = build_report(&records, Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));
        let second = build_report(&records, Some(date(2025, 1, 6)), Some(date(2025, 1, 7)));

        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }
}
