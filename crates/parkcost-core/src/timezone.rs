//! Timezone utilities for interpreting session timestamps
//!
//! Sessions are priced on local calendar dates, so every timestamp is
//! read in a single configured timezone that stays fixed for the whole
//! computation.

use crate::error::{PricingError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Accepted layouts for naive (offset-less) timestamps
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Configuration for timezone handling
#[derive(Debug, Clone)]
pub struct TimezoneConfig {
    /// The timezone sessions are priced in
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        let tz = get_local_timezone();
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }
}

impl TimezoneConfig {
    /// Create a configuration for an explicit timezone
    pub fn new(tz: Tz) -> Self {
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }

    /// Create a new timezone configuration from CLI arguments
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> Result<Self> {
        if use_utc {
            return Ok(Self::new(Tz::UTC));
        }

        if let Some(tz_str) = timezone_str {
            let tz = Tz::from_str(tz_str).map_err(|_| {
                PricingError::InvalidTimezone(format!(
                    "'{tz_str}'. Use format like 'Europe/London', 'America/New_York', or 'UTC'"
                ))
            })?;
            Ok(Self::new(tz))
        } else {
            Ok(Self::default())
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }

    /// Parse a session timestamp into the configured timezone
    ///
    /// Accepts `YYYY-MM-DD HH:MM:SS` (seconds optional) read as local time,
    /// or RFC 3339 with an explicit offset, which is converted. A local time
    /// that occurs twice at a DST change resolves to the earlier instant; a
    /// local time skipped by a DST change is rejected.
    pub fn parse_timestamp(&self, raw: &str) -> Result<DateTime<Tz>> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&self.tz));
        }

        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .ok_or_else(|| {
                PricingError::InvalidDate(format!("'{raw}'. Expected YYYY-MM-DD HH:MM:SS"))
            })?;

        self.tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
            PricingError::InvalidDate(format!(
                "'{raw}' does not exist in timezone {}",
                self.display_name()
            ))
        })
    }
}

/// Detect the system's local timezone
///
/// This function attempts to detect the local timezone from the system.
/// If detection fails, it falls back to UTC.
pub fn get_local_timezone() -> Tz {
    #[allow(clippy::collapsible_if)]
    if let Ok(tz_str) = std::env::var("TZ") {
        if let Ok(tz) = Tz::from_str(&tz_str) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}
