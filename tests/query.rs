#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempus::libs::error::AppError;
    use tempus::libs::query::{PageRequest, ReportFilter, SortOrder, TimerSortField};

    #[test]
    fn test_sort_field_parses_known_names() {
        assert_eq!("start_time".parse::<TimerSortField>().unwrap(), TimerSortField::StartTime);
        assert_eq!("startTime".parse::<TimerSortField>().unwrap(), TimerSortField::StartTime);
        assert_eq!("project.name".parse::<TimerSortField>().unwrap(), TimerSortField::ProjectName);
        assert_eq!("updatedAt".parse::<TimerSortField>().unwrap(), TimerSortField::UpdatedAt);
    }

    #[test]
    fn test_sort_field_rejects_unknown_names() {
        // Unrecognized fields must fail validation, not fall through to SQL.
        let err = "hourly_rate; DROP TABLE timers".parse::<TimerSortField>().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_sort_field_columns() {
        assert_eq!(TimerSortField::StartTime.column(), "t.start_time");
        assert_eq!(TimerSortField::ProjectName.column(), "p.name");
    }

    #[test]
    fn test_sort_order_sql() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
        assert_eq!(PageRequest::default().page_size, 10);
    }

    #[test]
    fn test_report_filter_accepts_valid_ranges() {
        let mut filter = ReportFilter::default();
        assert!(filter.validate().is_ok());

        filter.from_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        assert!(filter.validate().is_ok());

        filter.to_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_report_filter_rejects_inverted_range() {
        let filter = ReportFilter {
            from_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            to_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Default::default()
        };
        let err = filter.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
