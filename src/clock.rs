//! Date providers used when resolving `${year}` and `${month}`.

use chrono::{Datelike, Local, NaiveDate};

/// Source of "today" for format resolution.
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;

    /// Four-digit calendar year
    fn year(&self) -> i32 {
        self.today().year()
    }

    /// Calendar month in the range 1-12
    fn month(&self) -> u32 {
        self.today().month()
    }
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock { date }
    }

    /// Returns `None` if the year/month pair is not a valid calendar month.
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(FixedClock::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_given_date() {
        let clock = FixedClock::from_ym(2024, 11).unwrap();
        assert_eq!(clock.year(), 2024);
        assert_eq!(clock.month(), 11);
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_month() {
        assert!(FixedClock::from_ym(2024, 13).is_none());
        assert!(FixedClock::from_ym(2024, 0).is_none());
    }

    #[test]
    fn test_system_clock_month_in_range() {
        let month = SystemClock.month();
        assert!((1..=12).contains(&month));
        assert!(SystemClock.year() >= 2000);
    }
}
