//! Test clock pinned to a fixed instant.

use chrono::{DateTime, TimeZone, Utc};

use polyhedral_core::clock::Clock;

/// A clock that always returns the wrapped instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock pinned to midnight UTC on the given date.
    ///
    /// # Panics
    ///
    /// Panics if the date is not a valid calendar date.
    #[must_use]
    pub fn at_midnight(year: i32, month: u32, day: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
