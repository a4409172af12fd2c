//! Decoding of the interval list supplied on the command line
//!
//! The input is a JSON array of `{"start": ..., "end": ...}` objects whose
//! timestamps are read in the configured timezone.

use parkcost_core::{Interval, Result, TimezoneConfig};
use serde::Deserialize;
use tracing::warn;

/// One raw `{start, end}` pair as it appears in the input
#[derive(Debug, Clone, Deserialize)]
pub struct IntervalInput {
    pub start: String,
    pub end: String,
}

impl IntervalInput {
    /// Parse both timestamps into an [`Interval`]
    pub fn to_interval(&self, tz_config: &TimezoneConfig) -> Result<Interval> {
        let start = tz_config.parse_timestamp(&self.start)?;
        let end = tz_config.parse_timestamp(&self.end)?;
        Ok(Interval::new(start, end))
    }
}

/// Parse a JSON array of `{start, end}` pairs into intervals
///
/// Intervals whose end precedes their start are passed through unchanged
/// with a warning.
pub fn parse_intervals(raw: &str, tz_config: &TimezoneConfig) -> Result<Vec<Interval>> {
    let inputs: Vec<IntervalInput> = serde_json::from_str(raw)?;

    inputs
        .iter()
        .map(|input| {
            let interval = input.to_interval(tz_config)?;
            if interval.is_inverted() {
                warn!("Interval {} ends before it starts", interval);
            }
            Ok(interval)
        })
        .collect()
}
