//! Wall-clock seam used to stamp requests and fulfillments

use chrono::{Local, NaiveDate, NaiveDateTime};

/// `timeRequested` rendering, e.g. `14:05:09`
pub const TIME_REQUESTED_FORMAT: &str = "%H:%M:%S";

/// `fulfilledTime` rendering, e.g. `03/01/2024, 02:05:09 PM`
pub const FULFILLED_TIME_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Canonical storage form of `datePulled`
pub const DATE_STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current local time.
///
/// The ledger never calls `Local::now()` directly so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Today's date in canonical `YYYY-MM-DD` form
    fn today(&self) -> String {
        self.now().date().format(DATE_STORAGE_FORMAT).to_string()
    }
}

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Build from calendar components; `None` if they do not form a valid instant.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
