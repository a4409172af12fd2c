//! Core types, rate tables, and error handling for parkcost
//!
//! This crate provides the foundational value types (intervals and rates),
//! the immutable rate registry, timezone configuration, and the error
//! taxonomy shared by all other parkcost crates.

pub mod error;
pub mod rate;
pub mod rate_table;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use error::{PricingError, Result};
pub use rate::{MONETARY_SCALE, Rate, RateDefinition};
pub use rate_table::RateTable;
pub use timezone::TimezoneConfig;
pub use types::{Interval, Tier};
