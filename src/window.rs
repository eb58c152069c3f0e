use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Start and end of the statistics query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `interval` seconds that ends `end_time_offset` seconds before `now`
    pub fn ending_at(now: DateTime<Utc>, end_time_offset: u32, interval: u32) -> Self {
        let end = now - Duration::seconds(end_time_offset as i64);
        let start = end - Duration::seconds(interval as i64);
        TimeWindow { start, end }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} .. {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use more_asserts::*;
    use test_log::test;

    #[test]
    fn test_window_without_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let window = TimeWindow::ending_at(now, 0, 600);
        assert_eq!(window.end, now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 1, 11, 50, 0).unwrap());
    }

    #[test]
    fn test_window_with_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let window = TimeWindow::ending_at(now, 300, 60);
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 11, 55, 0).unwrap());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 1, 11, 54, 0).unwrap());
        assert_lt!(window.start, window.end);
    }
}
