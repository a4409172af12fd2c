//! Billable unit derivation
//!
//! Each measure is derived independently from an interval:
//!
//! - **hours**: whole elapsed hours, truncated, with a floor of one
//! - **days**: calendar days between the two dates, plus one when the
//!   session starts before the 05:00 day boundary and one more when it
//!   ends after it
//! - **weeks**: days divided by seven, rounded up
//! - **months**: whole calendar months between the two dates

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use parkcost_core::Interval;

/// Hour of day at which the facility's billing day rolls over
pub const DAY_BOUNDARY_HOUR: u32 = 5;

/// Billable unit counts for a single interval
///
/// Counts are signed: an inverted interval yields zero or negative days,
/// weeks and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillableUnits {
    pub hours: i64,
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
}

impl BillableUnits {
    /// Derive all measures for an interval
    ///
    /// # Examples
    /// ```
    /// use chrono::TimeZone;
    /// use chrono_tz::Tz;
    /// use parkcost_core::Interval;
    /// use parkcost_pricing::BillableUnits;
    ///
    /// let start = Tz::UTC.with_ymd_and_hms(2015, 9, 10, 14, 0, 0).unwrap();
    /// let end = Tz::UTC.with_ymd_and_hms(2015, 9, 12, 14, 0, 0).unwrap();
    /// let units = BillableUnits::from_interval(&Interval::new(start, end));
    ///
    /// assert_eq!(units.hours, 48);
    /// assert_eq!(units.days, 3);
    /// assert_eq!(units.weeks, 1);
    /// assert_eq!(units.months, 0);
    /// ```
    pub fn from_interval(interval: &Interval) -> Self {
        let start = interval.start();
        let end = interval.end();
        let days = billable_days(
            start.date_naive(),
            start.time(),
            end.date_naive(),
            end.time(),
        );

        Self {
            hours: billable_hours(interval),
            days,
            weeks: billable_weeks(days),
            months: billable_months(start.date_naive(), end.date_naive()),
        }
    }
}

fn billable_hours(interval: &Interval) -> i64 {
    let hours = interval.duration().num_hours();
    if hours > 0 { hours } else { 1 }
}

fn billable_days(
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_date: NaiveDate,
    end_time: NaiveTime,
) -> i64 {
    let mut days = end_date.signed_duration_since(start_date).num_days();

    if start_time.hour() < DAY_BOUNDARY_HOUR {
        days += 1;
    }
    if is_after_day_boundary(end_time) {
        days += 1;
    }

    days
}

/// Strictly later than 05:00:00; the boundary instant itself is not
fn is_after_day_boundary(time: NaiveTime) -> bool {
    match time.hour().cmp(&DAY_BOUNDARY_HOUR) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => {
            time.minute() > 0 || time.second() > 0 || time.nanosecond() > 0
        }
        std::cmp::Ordering::Less => false,
    }
}

/// Ceiling of `days / 7`; non-positive inputs truncate toward zero
fn billable_weeks(days: i64) -> i64 {
    if days > 0 { (days + 6) / 7 } else { days / 7 }
}

/// Whole calendar months from `start` to `end`, ignoring time of day
///
/// A month only counts once the end date reaches the start's day of month,
/// so 24 Jan -> 15 Feb is zero months and 24 Jan -> 24 Feb is one.
fn billable_months(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return -billable_months(end, start);
    }

    let mut months = i64::from(end.year() - start.year()) * 12
        + i64::from(end.month())
        - i64::from(start.month());
    if end.day() < start.day() {
        months -= 1;
    }

    months
}
