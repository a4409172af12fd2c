//! Per-unit rates with exact decimal cost arithmetic
//!
//! A [`Rate`] is an immutable (tier, unit cost, currency) triple. Unit costs
//! are only ever accepted as plain decimal strings and held as
//! [`rust_decimal::Decimal`], so no binary floating point enters a price.
//!
//! # Examples
//!
//! ```
//! use parkcost_core::rate::Rate;
//! use rust_decimal::Decimal;
//!
//! let daily = Rate::new("daily", "5", "gbp")?;
//! assert_eq!(daily.currency_code(), "GBP");
//! assert_eq!(daily.cost_for(3)?, Decimal::from(15));
//! # Ok::<(), parkcost_core::PricingError>(())
//! ```

use crate::error::{PricingError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of fractional digits kept on every monetary amount
pub const MONETARY_SCALE: u32 = 2;

/// Raw rate definition as it arrives from configuration
///
/// Nothing is validated until it is turned into a [`Rate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDefinition {
    /// Tier name, e.g. "hourly"
    pub tier: String,
    /// Cost of one unit as a decimal string, e.g. "12.99"
    pub unit_cost: String,
    /// Three-letter currency code
    pub currency_code: String,
}

impl RateDefinition {
    /// Create a new RateDefinition
    pub fn new(
        tier: impl Into<String>,
        unit_cost: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            tier: tier.into(),
            unit_cost: unit_cost.into(),
            currency_code: currency_code.into(),
        }
    }
}

/// Price of one unit of a billing tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    tier: String,
    unit_cost: Decimal,
    currency_code: String,
}

impl Rate {
    /// Create a new Rate
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Configuration`] if the tier name is empty,
    /// the unit cost is not a plain decimal number (`"12"`, `"12.99"`,
    /// `"-3.15"`), or the currency code is not exactly three characters.
    pub fn new(tier: impl Into<String>, unit_cost: &str, currency_code: &str) -> Result<Self> {
        let tier = tier.into();
        if tier.trim().is_empty() {
            return Err(PricingError::Configuration(
                "tier name is mandatory and cannot be empty".to_string(),
            ));
        }

        let unit_cost = parse_unit_cost(unit_cost)?;

        if currency_code.chars().count() != 3 {
            return Err(PricingError::Configuration(format!(
                "currency code '{currency_code}' must have the format 'XXX'"
            )));
        }

        Ok(Self {
            tier,
            unit_cost,
            currency_code: currency_code.to_uppercase(),
        })
    }

    /// Tier name this rate is registered under
    pub fn tier(&self) -> &str {
        &self.tier
    }

    /// Cost of a single unit
    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    /// Upper-cased currency code
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Cost of `units` units, truncated to [`MONETARY_SCALE`] digits
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidAmount`] for a negative unit count and
    /// [`PricingError::Overflow`] if the product leaves the decimal range.
    pub fn cost_for(&self, units: i64) -> Result<Decimal> {
        if units < 0 {
            return Err(PricingError::InvalidAmount(units));
        }

        let cost = self
            .unit_cost
            .checked_mul(Decimal::from(units))
            .ok_or(PricingError::Overflow)?;

        Ok(cost.round_dp_with_strategy(MONETARY_SCALE, RoundingStrategy::ToZero))
    }
}

impl TryFrom<RateDefinition> for Rate {
    type Error = PricingError;

    fn try_from(definition: RateDefinition) -> Result<Self> {
        Rate::new(
            definition.tier,
            &definition.unit_cost,
            &definition.currency_code,
        )
    }
}

/// Parse a unit cost written as an optionally signed plain decimal
fn parse_unit_cost(raw: &str) -> Result<Decimal> {
    let invalid = || {
        PricingError::Configuration(format!(
            "unit cost '{raw}' is invalid, expected a decimal string such as '12.99' or '12'"
        ))
    };

    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return Err(invalid());
    }

    Decimal::from_str(raw).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_cost() {
        let rate = Rate::new("testPrice", "3", "GBP").unwrap();
        assert_eq!(rate.tier(), "testPrice");
        assert_eq!(rate.currency_code(), "GBP");
        assert_eq!(rate.unit_cost(), dec!(3));
        assert_eq!(rate.cost_for(10).unwrap(), dec!(30));
    }

    #[test]
    fn test_fractional_unit_cost() {
        let rate = Rate::new("testPrice", "3.15", "GBP").unwrap();
        assert_eq!(rate.cost_for(100).unwrap(), dec!(315));
    }

    #[test]
    fn test_negative_unit_cost() {
        let rate = Rate::new("testPrice", "-3.15", "GBP").unwrap();
        assert_eq!(rate.cost_for(100).unwrap(), dec!(-315));
    }

    #[test]
    fn test_cost_is_truncated_to_monetary_scale() {
        let rate = Rate::new("testPrice", "3.157", "GBP").unwrap();
        // 3.157 * 3 = 9.471
        assert_eq!(rate.cost_for(3).unwrap(), dec!(9.47));

        let rate = Rate::new("testPrice", "0.999", "GBP").unwrap();
        // 0.999 * 1 = 0.999, never rounded up
        assert_eq!(rate.cost_for(1).unwrap(), dec!(0.99));
    }

    #[test]
    fn test_zero_units_cost_nothing() {
        let rate = Rate::new("hourly", "2", "GBP").unwrap();
        assert_eq!(rate.cost_for(0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_currency_is_upper_cased() {
        let rate = Rate::new("hourly", "2", "gbp").unwrap();
        assert_eq!(rate.currency_code(), "GBP");
    }

    #[test]
    fn test_empty_tier_is_rejected() {
        let result = Rate::new("", "3", "GBP");
        assert!(matches!(result, Err(PricingError::Configuration(_))));
    }

    #[test]
    fn test_malformed_unit_costs_are_rejected() {
        for raw in ["", "abc", "1/2", "3.12.1", "1e3", " 12", "12.", ".5", "--1", "1_000"] {
            let result = Rate::new("testPrice", raw, "GBP");
            assert!(
                matches!(result, Err(PricingError::Configuration(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_currency_is_rejected() {
        for code in ["", "GB", "TEST"] {
            let result = Rate::new("testPrice", "3", code);
            assert!(matches!(result, Err(PricingError::Configuration(_))));
        }
    }

    #[test]
    fn test_negative_units_are_rejected() {
        let rate = Rate::new("testPrice", "3", "GBP").unwrap();
        assert!(matches!(
            rate.cost_for(-10),
            Err(PricingError::InvalidAmount(-10))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let rate = Rate::new("testPrice", "79228162514264337593543950335", "GBP").unwrap();
        assert!(matches!(rate.cost_for(2), Err(PricingError::Overflow)));
    }

    #[test]
    fn test_try_from_definition() {
        let rate = Rate::try_from(RateDefinition::new("weekly", "20", "eur")).unwrap();
        assert_eq!(rate.tier(), "weekly");
        assert_eq!(rate.unit_cost(), dec!(20));
        assert_eq!(rate.currency_code(), "EUR");
    }
}
