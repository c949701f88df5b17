#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tempus::libs::formatter::{duration_hours, format_hms, round2};

    #[test]
    fn test_format_hms_zero() {
        assert_eq!(format_hms(&Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_format_hms_components() {
        assert_eq!(format_hms(&Duration::seconds(45)), "00:00:45");
        assert_eq!(format_hms(&Duration::minutes(30)), "00:30:00");
        assert_eq!(format_hms(&(Duration::hours(2) + Duration::minutes(30))), "02:30:00");
        assert_eq!(format_hms(&(Duration::hours(8) + Duration::minutes(45) + Duration::seconds(5))), "08:45:05");
    }

    #[test]
    fn test_format_hms_large_hours() {
        assert_eq!(format_hms(&Duration::hours(100)), "100:00:00");
    }

    #[test]
    fn test_format_hms_negative_clamps_to_zero() {
        assert_eq!(format_hms(&Duration::hours(-1)), "00:00:00");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(4.5), 4.5);
        assert_eq!(round2(77.77777), 77.78);
        assert_eq!(round2(22.22222), 22.22);
        // Half-away-from-zero on an exactly representable midpoint.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(duration_hours(&Duration::hours(2)), 2.0);
        assert_eq!(duration_hours(&Duration::minutes(90)), 1.5);
        assert_eq!(duration_hours(&Duration::zero()), 0.0);
    }
}
