//! parkcost - Price parking sessions against tiered rates
//!
//! This library provides functionality to:
//! - Build an immutable rate table of hourly, daily, weekly and monthly rates
//! - Derive billable units for each parking interval
//! - Select the cheapest tier combination per interval and total them exactly
//! - Render totals and per-interval breakdowns as text or JSON
//!
//! # Examples
//!
//! ```
//! use parkcost::{PricingCalculator, RateTable, TimezoneConfig, input::parse_intervals};
//! use chrono_tz::Tz;
//! use std::sync::Arc;
//!
//! let calculator = PricingCalculator::new(Arc::new(RateTable::reference("GBP")?));
//! let tz_config = TimezoneConfig::new(Tz::Europe__London);
//!
//! let intervals = parse_intervals(
//!     r#"[{"start": "2015-09-10 14:00:00", "end": "2015-09-12 14:00:00"}]"#,
//!     &tz_config,
//! )?;
//! let total = calculator.calculate(&intervals)?;
//! assert_eq!(total, rust_decimal::Decimal::from(15));
//! # Ok::<(), parkcost::PricingError>(())
//! ```

pub mod cli;
pub mod input;

// Re-export commonly used types
pub use parkcost_core::{
    Interval, MONETARY_SCALE, PricingError, Rate, RateDefinition, RateTable, Result, Tier,
    TimezoneConfig, error, rate, rate_table, timezone, types,
};
pub use parkcost_pricing::{
    BillableUnits, IntervalQuote, PricingCalculator, Quotation, TierChoice, measures,
    pricing_calculator,
};
pub use parkcost_terminal::output;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
