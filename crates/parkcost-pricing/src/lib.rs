//! Billable unit derivation and tier selection for parkcost
//!
//! This crate turns an interval into billable hours, days, weeks and
//! months, prices the candidate tier combinations against a rate table,
//! and keeps the cheapest.

pub mod measures;
pub mod pricing_calculator;

pub use measures::BillableUnits;
pub use pricing_calculator::{IntervalQuote, PricingCalculator, Quotation, TierChoice};
