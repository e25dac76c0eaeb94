//! Wall-clock source for the `date` command.

use chrono::{DateTime, FixedOffset, Local};

/// Abstraction over the wall clock.
pub trait TimeSource {
    /// Current local time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Format like a browser's `Date.toString()`, minus the zone name:
/// `Mon Oct 19 2026 14:03:07 GMT+0200`.
pub fn format_timestamp(t: &DateTime<FixedOffset>) -> String {
    t.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
