//! Date formatting for display.

use chrono::{DateTime, Utc};

/// Short date for table cells, e.g. `"Jan 15, 24"`.
pub fn format_date_short(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %y").to_string()
}

/// Long date with time, e.g. `"January 15, 2024 10:30"`.
pub fn format_date_long(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_short() {
        let d = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date_short(&d), "Jan 15, 24");
    }

    #[test]
    fn test_format_date_long() {
        let d = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date_long(&d), "January 15, 2024 10:30");
    }

    #[test]
    fn test_single_digit_day_unpadded() {
        let d = Utc.with_ymd_and_hms(2023, 12, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date_short(&d), "Dec 5, 23");
    }
}
