//! Error types for parkcost
//!
//! This module defines the error types used throughout the parkcost crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use parkcost_core::error::{PricingError, Result};
//!
//! fn lookup_tier(name: &str) -> Result<()> {
//!     Err(PricingError::RateNotFound(name.to_string()))
//! }
//!
//! assert!(lookup_tier("yearly").is_err());
//! ```

use thiserror::Error;

/// Main error type for parkcost operations
///
/// Every variant is unrecoverable where it is raised: pricing either
/// succeeds with an exact total or fails as a whole.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Malformed rate definition (empty tier, non-decimal cost, bad currency)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Two rate definitions share a tier name
    #[error("Duplicate rate for tier '{0}'")]
    DuplicateRate(String),

    /// A tier was requested that the rate table does not define
    #[error("No rate defined for tier '{0}'")]
    RateNotFound(String),

    /// A cost was requested for a negative unit count
    #[error("Invalid amount: cannot bill {0} units")]
    InvalidAmount(i64),

    /// A monetary amount left the representable decimal range
    #[error("Monetary amount overflow")]
    Overflow,

    /// Invalid timestamp format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in parkcost
pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PricingError::RateNotFound("monthly".to_string());
        assert_eq!(error.to_string(), "No rate defined for tier 'monthly'");

        let error = PricingError::InvalidAmount(-10);
        assert_eq!(error.to_string(), "Invalid amount: cannot bill -10 units");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error: PricingError = json_error.into();
        assert!(matches!(error, PricingError::Json(_)));
    }
}
