//! Core domain types for parkcost
//!
//! This module contains the billable session value type and the
//! well-known pricing tiers the calculator reads from a rate table.

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;
use std::fmt;

/// One of the standard pricing granularities
///
/// Rate tables are keyed by plain strings so they can carry extra tiers;
/// these are the four keys the calculator looks up.
///
/// # Examples
/// ```
/// use parkcost_core::types::Tier;
///
/// assert_eq!(Tier::Weekly.as_str(), "weekly");
/// assert_eq!(Tier::Monthly.to_string(), "monthly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl Tier {
    /// All standard tiers, finest first
    pub const ALL: [Tier; 4] = [Tier::Hourly, Tier::Daily, Tier::Weekly, Tier::Monthly];

    /// Key used for this tier in a rate table
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Hourly => "hourly",
            Tier::Daily => "daily",
            Tier::Weekly => "weekly",
            Tier::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single billable session
///
/// Both timestamps carry the timezone the session is priced in; calendar
/// dates and times of day are read in that zone.
///
/// `start <= end` is a precondition of pricing, not something this type
/// checks. An inverted interval is accepted and prices to whatever its
/// (negative or zero) measures produce.
///
/// # Examples
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
/// use parkcost_core::types::Interval;
///
/// let start = Tz::Europe__London.with_ymd_and_hms(2015, 9, 10, 14, 0, 0).unwrap();
/// let end = Tz::Europe__London.with_ymd_and_hms(2015, 9, 12, 14, 0, 0).unwrap();
/// let interval = Interval::new(start, end);
///
/// assert_eq!(interval.duration().num_hours(), 48);
/// assert!(!interval.is_inverted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl Interval {
    /// Create a new Interval
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// Get the start timestamp
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Get the end timestamp
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Elapsed time from start to end, negative when inverted
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Whether the end lies before the start
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}
