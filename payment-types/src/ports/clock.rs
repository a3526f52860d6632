//! Time source port.
//!
//! The query service never reads the system clock directly; relative
//! queries ("current month", "last N days") go through this trait so tests
//! can substitute a deterministic provider.

use chrono::{DateTime, FixedOffset};

use crate::domain::YearMonth;

/// Port trait for the current date and time.
pub trait DateTimeProvider: Send + Sync {
    /// The current instant, with its zone offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current calendar month.
    fn current_year_month(&self) -> YearMonth {
        YearMonth::of_date(&self.now())
    }
}
