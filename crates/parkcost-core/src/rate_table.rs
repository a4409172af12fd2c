//! Immutable registry of rates keyed by tier name
//!
//! A [`RateTable`] is built once from configuration and is read-only
//! afterwards, so a single table can be shared by reference (or `Arc`)
//! across any number of calculations.

use crate::error::{PricingError, Result};
use crate::rate::{Rate, RateDefinition};
use crate::types::Tier;
use std::collections::HashMap;
use tracing::debug;

/// Registry of rates, unique by tier name
///
/// # Examples
///
/// ```
/// use parkcost_core::{Rate, RateTable, Tier};
///
/// let table = RateTable::new(vec![
///     Rate::new("hourly", "2", "GBP")?,
///     Rate::new("daily", "5", "GBP")?,
/// ])?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rate(Tier::Daily)?.tier(), "daily");
/// assert!(table.lookup("monthly").is_err());
/// # Ok::<(), parkcost_core::PricingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    /// Rates in the order they were supplied
    rates: Vec<Rate>,
    /// Tier name to position in `rates`
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Build a table from already constructed rates
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::DuplicateRate`] if two rates share a tier
    /// name. No table is produced in that case.
    pub fn new(rates: impl IntoIterator<Item = Rate>) -> Result<Self> {
        let mut table = Self::default();
        for rate in rates {
            table.insert(rate)?;
        }
        debug!("Built rate table with {} tiers", table.len());
        Ok(table)
    }

    /// Build a table from raw configuration entries
    ///
    /// Entries are validated in order; the first malformed entry fails with
    /// [`PricingError::Configuration`] and the first repeated tier with
    /// [`PricingError::DuplicateRate`].
    pub fn from_definitions(definitions: impl IntoIterator<Item = RateDefinition>) -> Result<Self> {
        let mut table = Self::default();
        for definition in definitions {
            table.insert(Rate::try_from(definition)?)?;
        }
        debug!("Built rate table with {} tiers", table.len());
        Ok(table)
    }

    /// The reference tariff: hourly 2, daily 5, weekly 20, monthly 70
    pub fn reference(currency_code: &str) -> Result<Self> {
        Self::from_definitions([
            RateDefinition::new(Tier::Hourly.as_str(), "2", currency_code),
            RateDefinition::new(Tier::Daily.as_str(), "5", currency_code),
            RateDefinition::new(Tier::Weekly.as_str(), "20", currency_code),
            RateDefinition::new(Tier::Monthly.as_str(), "70", currency_code),
        ])
    }

    fn insert(&mut self, rate: Rate) -> Result<()> {
        if self.index.contains_key(rate.tier()) {
            return Err(PricingError::DuplicateRate(rate.tier().to_string()));
        }
        self.index.insert(rate.tier().to_string(), self.rates.len());
        self.rates.push(rate);
        Ok(())
    }

    /// Look up a rate by tier name
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::RateNotFound`] if the tier is absent.
    pub fn lookup(&self, tier: &str) -> Result<&Rate> {
        self.index
            .get(tier)
            .map(|&position| &self.rates[position])
            .ok_or_else(|| PricingError::RateNotFound(tier.to_string()))
    }

    /// Look up one of the standard tiers
    pub fn rate(&self, tier: Tier) -> Result<&Rate> {
        self.lookup(tier.as_str())
    }

    /// Number of rates in the table
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table has no rates
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over the rates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Rate> {
        self.rates.iter()
    }

    /// Currency shared by every rate, `None` if empty or mixed
    pub fn currency_code(&self) -> Option<&str> {
        let first = self.rates.first()?.currency_code();
        self.rates
            .iter()
            .all(|rate| rate.currency_code() == first)
            .then_some(first)
    }
}
