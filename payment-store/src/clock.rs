//! System clock adapter.

use chrono::{DateTime, FixedOffset, Local};

use payment_types::DateTimeProvider;

/// Wall-clock time provider.
///
/// Reports local time with its fixed offset; the current month comes from
/// the trait's default derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateTimeProvider;

impl SystemDateTimeProvider {
    /// Creates a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl DateTimeProvider for SystemDateTimeProvider {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
