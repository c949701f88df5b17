#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use tempfile::TempDir;
    use tempus::libs::export::{ExportFormat, Exporter};
    use tempus::libs::timer::{ProjectRef, TimerRecord};
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ExportTestContext { temp_dir }
        }
    }

    fn ts(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    fn record(id: i64, start: &str, end: Option<&str>, description: Option<&str>, project: Option<&str>) -> TimerRecord {
        TimerRecord {
            id,
            start_time: ts(start),
            end_time: end.map(ts),
            description: description.map(str::to_string),
            hourly_rate: None,
            user_email: Some("dev@example.com".to_string()),
            project: project.map(|name| ProjectRef {
                id: 1,
                name: name.to_string(),
                client: None,
            }),
            tag: None,
            created_at: Some(ts("2025-01-06 08:00")),
            updated_at: Some(ts("2025-01-06 08:00")),
        }
    }

    fn sample_records() -> Vec<TimerRecord> {
        vec![
            record(1, "2025-01-06 09:00", Some("2025-01-06 11:00"), Some("api work"), Some("Backend")),
            record(2, "2025-01-06 13:00", Some("2025-01-06 14:30"), Some("review"), Some("Backend")),
            record(3, "2025-01-07 09:00", Some("2025-01-07 10:00"), Some("call"), None),
        ]
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_layout(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("report.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone())).unwrap();
        let path = exporter.export(&sample_records(), 0.0).unwrap();
        assert_eq!(path, output);

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ID,User Name,Project Name,Duration (Hours),Start Time,End Time,Created At,Updated At");
        // Header + three records + the total row.
        assert_eq!(lines.len(), 5);

        assert!(lines[1].starts_with("1,dev@example.com,Backend,2.00,"));
        assert!(lines[2].contains(",1.50,"));
        // A timer without a project exports N/A in the project column.
        assert!(lines[3].starts_with("3,dev@example.com,N/A,1.00,"));

        assert_eq!(lines[4], "TOTAL,,,4.50,,,,");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_open_timer_has_zero_duration(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("open.csv");
        let records = vec![record(1, "2025-01-06 09:00", None, Some("running"), None)];
        Exporter::new(ExportFormat::Csv, Some(output.clone())).unwrap().export(&records, 0.0).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[1].contains(",0.00,"));
        assert!(lines[1].contains("N/A"));
        assert_eq!(lines[2], "TOTAL,,,0.00,,,,");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export_writes_workbook(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("report.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output.clone())).unwrap();
        let path = exporter.export(&sample_records(), 100.0).unwrap();

        assert_eq!(path, output);
        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_output_path_is_unique_per_export(ctx: &mut ExportTestContext) {
        // Route the data directory into the test sandbox.
        std::env::set_var("HOME", ctx.temp_dir.path());
        std::env::set_var("LOCALAPPDATA", ctx.temp_dir.path());

        let exporter = Exporter::new(ExportFormat::Csv, None).unwrap();
        let name = exporter.output_path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("timer-report-"));
        assert!(name.ends_with(".csv"));

        let path = exporter.export(&sample_records(), 0.0).unwrap();
        assert!(path.exists());
    }
}
