//! Calendar year-month bucket.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A calendar bucket identified by (year, month), ignoring day and time.
///
/// Month membership is always judged in a timestamp's own zone offset: a
/// payment booked at `2024-04-01T00:30+02:00` belongs to April even though
/// the same instant in UTC is still late March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new YearMonth.
    ///
    /// # Validation
    /// - Month must be in 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::MonthOutOfRange(month));
        }

        Ok(Self { year, month })
    }

    /// The calendar month a timestamp falls in, read in its own offset.
    pub fn of_date(date: &DateTime<FixedOffset>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if the timestamp falls in this calendar month.
    pub fn contains(&self, date: &DateTime<FixedOffset>) -> bool {
        Self::of_date(date) == *self
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_valid_month() {
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 3);
    }

    #[test]
    fn test_month_out_of_range_fails() {
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(DomainError::MonthOutOfRange(0))
        ));
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(DomainError::MonthOutOfRange(13))
        ));
    }

    #[test]
    fn test_contains_matches_year_and_month() {
        let ym = YearMonth::new(2024, 3).unwrap();
        let in_month = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 31, 23, 59, 59)
            .unwrap();
        let next_month = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
            .unwrap();
        let same_month_other_year = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 3, 15, 12, 0, 0)
            .unwrap();

        assert!(ym.contains(&in_month));
        assert!(!ym.contains(&next_month));
        assert!(!ym.contains(&same_month_other_year));
    }

    #[test]
    fn test_membership_uses_own_offset() {
        // 2024-04-01T00:30+02:00 is 2024-03-31T22:30 in UTC; the record's
        // own offset decides, so this is April.
        let date = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 4, 1, 0, 30, 0)
            .unwrap();

        assert!(YearMonth::new(2024, 4).unwrap().contains(&date));
        assert!(!YearMonth::new(2024, 3).unwrap().contains(&date));
    }

    #[test]
    fn test_display() {
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(format!("{}", ym), "2024-03");
    }
}
