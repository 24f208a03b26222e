//! DateWindow Value Object

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Trailing posting-date window ending today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of `days` days ending on `today`
    pub fn trailing(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Window of `days` days ending on the local date
    pub fn trailing_from_now(days: u32) -> Self {
        Self::trailing(Local::now().date_naive(), days)
    }

    /// Length of the window in whole days
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_week_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = DateWindow::trailing(today, 14);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(window.end, today);
        assert_eq!(window.days(), 14);
    }
}
