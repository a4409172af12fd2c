//! Terminal output formatting for parkcost
//!
//! This crate provides the plain-text, table and JSON renderings of a
//! priced set of intervals.

pub mod output;

pub use output::{JsonFormatter, OutputFormatter, TableFormatter, get_formatter};
