//! Pricing calculator for sets of parking intervals
//!
//! For every interval the calculator derives [`BillableUnits`], prices the
//! candidate tier combinations against a shared [`RateTable`], and keeps the
//! cheapest. Totals are accumulated as exact decimals per call; the
//! calculator itself holds no mutable state and can be reused freely.
//!
//! # Examples
//!
//! ```
//! use chrono::TimeZone;
//! use chrono_tz::Tz;
//! use parkcost_core::{Interval, RateTable};
//! use parkcost_pricing::PricingCalculator;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let table = Arc::new(RateTable::reference("GBP")?);
//! let calculator = PricingCalculator::new(table);
//!
//! let start = Tz::UTC.with_ymd_and_hms(2015, 9, 10, 14, 0, 0).unwrap();
//! let end = Tz::UTC.with_ymd_and_hms(2015, 9, 23, 14, 0, 0).unwrap();
//!
//! let total = calculator.calculate(&[Interval::new(start, end)])?;
//! assert_eq!(total, Decimal::from(40));
//! # Ok::<(), parkcost_core::PricingError>(())
//! ```

use crate::measures::BillableUnits;
use parkcost_core::error::{PricingError, Result};
use parkcost_core::{Interval, RateTable, Tier};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Tier combination an interval ended up billed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChoice {
    /// Billable hours at the hourly rate
    Hourly,
    /// Billable days at the daily rate
    Daily,
    /// Full weeks at the weekly rate plus leftover days at the daily rate
    WeeksAndDays,
    /// Billable weeks, rounded up, at the weekly rate
    Weekly,
    /// A single month at the monthly rate
    SingleMonth,
    /// Crossed calendar months at the monthly rate
    Monthly,
}

impl fmt::Display for TierChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TierChoice::Hourly => "hourly",
            TierChoice::Daily => "daily",
            TierChoice::WeeksAndDays => "weeks+days",
            TierChoice::Weekly => "weekly",
            TierChoice::SingleMonth => "single month",
            TierChoice::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

/// Price of one interval together with how it was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalQuote {
    pub interval: Interval,
    pub units: BillableUnits,
    pub choice: TierChoice,
    pub cost: Decimal,
}

/// Quotes for a whole set of intervals and their exact total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quotation {
    pub quotes: Vec<IntervalQuote>,
    pub total: Decimal,
}

type Candidates = SmallVec<[(TierChoice, Decimal); 5]>;

/// Prices intervals against a rate table
///
/// The table is taken by `Arc` so one configured table can back any number
/// of calculators and concurrent calls.
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    rate_table: Arc<RateTable>,
}

impl PricingCalculator {
    /// Create a new PricingCalculator over a fully built rate table
    pub fn new(rate_table: Arc<RateTable>) -> Self {
        Self { rate_table }
    }

    /// The rate table prices are read from
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Total cost of all intervals
    ///
    /// An empty slice costs zero.
    ///
    /// # Errors
    ///
    /// Fails as a whole, with no partial total, if a required tier is
    /// missing from the rate table or an amount overflows.
    pub fn calculate(&self, intervals: &[Interval]) -> Result<Decimal> {
        intervals.iter().try_fold(Decimal::ZERO, |total, interval| {
            let quote = self.quote(interval)?;
            total.checked_add(quote.cost).ok_or(PricingError::Overflow)
        })
    }

    /// Quote every interval and total them
    ///
    /// Same result as [`calculate`](Self::calculate), keeping the
    /// per-interval breakdown.
    pub fn calculate_quotes(&self, intervals: &[Interval]) -> Result<Quotation> {
        let mut quotation = Quotation {
            quotes: Vec::with_capacity(intervals.len()),
            total: Decimal::ZERO,
        };

        for interval in intervals {
            let quote = self.quote(interval)?;
            quotation.total = quotation
                .total
                .checked_add(quote.cost)
                .ok_or(PricingError::Overflow)?;
            quotation.quotes.push(quote);
        }

        debug!(
            "Priced {} intervals, total {}",
            quotation.quotes.len(),
            quotation.total
        );
        Ok(quotation)
    }

    /// Price a single interval
    pub fn quote(&self, interval: &Interval) -> Result<IntervalQuote> {
        let units = BillableUnits::from_interval(interval);
        let (choice, cost) = self.cheapest(&units)?;

        debug!(
            "Interval {}: {:?} billed {} at {}",
            interval, units, choice, cost
        );

        Ok(IntervalQuote {
            interval: *interval,
            units,
            choice,
            cost,
        })
    }

    /// Cheapest tier combination for already derived units
    ///
    /// Once a calendar month is crossed the monthly rate is used without
    /// comparing other tiers. Ties keep the earliest candidate, in the order
    /// hourly, daily, weeks+days, weekly, single month.
    pub fn cheapest(&self, units: &BillableUnits) -> Result<(TierChoice, Decimal)> {
        if units.months > 0 {
            return Ok((TierChoice::Monthly, self.cost(Tier::Monthly, units.months)?));
        }

        let candidates = self.candidates(units)?;
        let mut best = candidates[0];
        for &(choice, cost) in &candidates[1..] {
            if cost < best.1 {
                best = (choice, cost);
            }
        }

        Ok(best)
    }

    fn candidates(&self, units: &BillableUnits) -> Result<Candidates> {
        let mut candidates = Candidates::new();
        candidates.push((TierChoice::Hourly, self.cost(Tier::Hourly, units.hours)?));

        if units.days > 0 {
            candidates.push((TierChoice::Daily, self.cost(Tier::Daily, units.days)?));

            let leftover_days = self.cost(Tier::Daily, units.days % 7)?;
            let full_weeks = self.cost(Tier::Weekly, units.days / 7)?;
            let mixed = leftover_days
                .checked_add(full_weeks)
                .ok_or(PricingError::Overflow)?;
            candidates.push((TierChoice::WeeksAndDays, mixed));
        }

        if units.weeks > 0 {
            candidates.push((TierChoice::Weekly, self.cost(Tier::Weekly, units.weeks)?));
            candidates.push((TierChoice::SingleMonth, self.cost(Tier::Monthly, 1)?));
        }

        Ok(candidates)
    }

    fn cost(&self, tier: Tier, units: i64) -> Result<Decimal> {
        self.rate_table.rate(tier)?.cost_for(units)
    }
}
