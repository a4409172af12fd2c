//! Common test utilities and helpers for parkcost tests
//!
//! This module provides reusable builders for intervals and calculators so
//! scenario and property tests read the same way.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use parkcost::{Interval, PricingCalculator, RateTable};
use std::sync::Arc;

/// Currency used by the reference tariff in tests
#[allow(dead_code)]
pub const TEST_CURRENCY: &str = "GBP";

/// Calculator over the reference tariff (2/5/20/70 GBP)
pub fn reference_calculator() -> PricingCalculator {
    PricingCalculator::new(Arc::new(
        RateTable::reference(TEST_CURRENCY).expect("reference tariff is valid"),
    ))
}

/// Parse a `YYYY-MM-DD HH:MM` local time in UTC
#[allow(dead_code)]
pub fn at(raw: &str) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .unwrap_or_else(|e| panic!("bad test timestamp '{raw}': {e}"));
    Tz::UTC.from_utc_datetime(&naive)
}

/// Build an interval from two `YYYY-MM-DD HH:MM` strings
#[allow(dead_code)]
pub fn interval(start: &str, end: &str) -> Interval {
    Interval::new(at(start), at(end))
}
