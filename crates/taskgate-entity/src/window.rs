//! Inclusive calendar date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use taskgate_core::error::AppError;

/// An inclusive `start..=end` span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting one that ends before it starts.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::invalid_date_range(format!(
                "Window starts on {start} but ends on {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_core::error::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_single_day_window() {
        let window = DateWindow::new(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(window.days(), 1);
    }

    #[test]
    fn test_reversed_window_rejected() {
        let err = DateWindow::new(date(2025, 3, 2), date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDateRange);
    }

    #[test]
    fn test_display() {
        let window = DateWindow::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();
        assert_eq!(window.to_string(), "2025-01-01..=2025-12-31");
    }
}
