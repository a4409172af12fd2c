//! CLI interface for parkcost
//!
//! This module defines the command-line interface using clap. Rates can be
//! given per tier (flags or `PARKCOST_*` environment variables) or as one
//! JSON list of definitions; they default to the reference tariff.
//!
//! # Example
//!
//! ```bash
//! # Price two sessions with the reference rates
//! parkcost '[{"start":"2015-09-10 14:00:00","end":"2015-09-12 14:00:00"},
//!            {"start":"2015-01-09 12:00:00","end":"2015-01-09 12:00:00"}]'
//!
//! # Read sessions from stdin and show how each one was billed
//! cat sessions.json | parkcost --breakdown --timezone Europe/London
//! ```

use clap::{Args, Parser};
use parkcost_core::{PricingError, RateDefinition, RateTable, Result, Tier, TimezoneConfig};
use std::io::Read;

/// Price parking sessions against hourly, daily, weekly and monthly rates
#[derive(Parser, Debug, Clone)]
#[command(name = "parkcost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON array of {"start": ..., "end": ...} pairs; read from stdin when omitted
    pub dates: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show how each interval was billed
    #[arg(long, short = 'b')]
    pub breakdown: bool,

    /// Show debug output on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(flatten)]
    pub rates: RateArgs,

    #[command(flatten)]
    pub timezone_args: TimezoneArgs,
}

impl Cli {
    /// The raw interval list, from the argument or stdin
    pub fn read_dates(&self) -> Result<String> {
        match &self.dates {
            Some(dates) => Ok(dates.clone()),
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Rate table configuration
#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    /// Cost of one hour
    #[arg(long, env = "PARKCOST_HOURLY", default_value = "2")]
    pub hourly: String,

    /// Cost of one day
    #[arg(long, env = "PARKCOST_DAILY", default_value = "5")]
    pub daily: String,

    /// Cost of one week
    #[arg(long, env = "PARKCOST_WEEKLY", default_value = "20")]
    pub weekly: String,

    /// Cost of one month
    #[arg(long, env = "PARKCOST_MONTHLY", default_value = "70")]
    pub monthly: String,

    /// Three-letter currency code for the per-tier rates
    #[arg(long, env = "PARKCOST_CURRENCY", default_value = "GBP")]
    pub currency: String,

    /// JSON array of {"tier", "unit_cost", "currency_code"} definitions
    /// (replaces the per-tier options)
    #[arg(long, env = "PARKCOST_RATES")]
    pub rates: Option<String>,
}

impl RateArgs {
    /// Rate definitions in configuration order
    pub fn definitions(&self) -> Result<Vec<RateDefinition>> {
        if let Some(rates) = &self.rates {
            return serde_json::from_str(rates).map_err(|e| {
                PricingError::Configuration(format!("invalid rate definitions: {e}"))
            });
        }

        Ok(vec![
            RateDefinition::new(Tier::Hourly.as_str(), &self.hourly, &self.currency),
            RateDefinition::new(Tier::Daily.as_str(), &self.daily, &self.currency),
            RateDefinition::new(Tier::Weekly.as_str(), &self.weekly, &self.currency),
            RateDefinition::new(Tier::Monthly.as_str(), &self.monthly, &self.currency),
        ])
    }

    /// Build and validate the rate table
    pub fn to_rate_table(&self) -> Result<RateTable> {
        RateTable::from_definitions(self.definitions()?)
    }
}

/// Timezone selection shared by all pricing runs
#[derive(Args, Debug, Clone)]
pub struct TimezoneArgs {
    /// Timezone timestamps are read in (e.g. "Europe/London", "UTC").
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z')]
    pub timezone: Option<String>,

    /// Read timestamps as UTC (overrides --timezone)
    #[arg(long)]
    pub utc: bool,
}

impl TimezoneArgs {
    /// Resolve the timezone configuration
    pub fn to_config(&self) -> Result<TimezoneConfig> {
        TimezoneConfig::from_cli(self.timezone.as_deref(), self.utc)
    }
}
