//! Output formatting module for pricing results
//!
//! Two formatters are provided behind the [`OutputFormatter`] trait:
//! [`TableFormatter`] for humans and [`JsonFormatter`] for scripts. Both can
//! render either the bare total or a per-interval breakdown.

use parkcost_pricing::{IntervalQuote, Quotation};
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use serde_json::json;

/// Renders a quotation for display
pub trait OutputFormatter {
    /// Format only the grand total
    fn format_total(&self, quotation: &Quotation, currency: Option<&str>) -> String;

    /// Format every interval's quote followed by the total
    fn format_breakdown(&self, quotation: &Quotation, currency: Option<&str>) -> String;
}

/// Render a monetary amount with exactly two fractional digits
fn format_amount(amount: Decimal) -> String {
    let mut amount = amount;
    amount.rescale(parkcost_core::MONETARY_SCALE);
    amount.to_string()
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    fn format_money(amount: Decimal, currency: Option<&str>) -> String {
        match currency {
            Some(code) => format!("{} {code}", format_amount(amount)),
            None => format_amount(amount),
        }
    }

    fn quote_row(index: usize, quote: &IntervalQuote, currency: Option<&str>) -> prettytable::Row {
        row![
            index + 1,
            quote.interval.start().format("%Y-%m-%d %H:%M"),
            quote.interval.end().format("%Y-%m-%d %H:%M"),
            r -> quote.units.hours,
            r -> quote.units.days,
            r -> quote.units.weeks,
            r -> quote.units.months,
            quote.choice,
            r -> Self::format_money(quote.cost, currency)
        ]
    }
}

impl OutputFormatter for TableFormatter {
    fn format_total(&self, quotation: &Quotation, currency: Option<&str>) -> String {
        Self::format_money(quotation.total, currency)
    }

    fn format_breakdown(&self, quotation: &Quotation, currency: Option<&str>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "#",
            b -> "Start",
            b -> "End",
            b -> "Hours",
            b -> "Days",
            b -> "Weeks",
            b -> "Months",
            b -> "Billed As",
            b -> "Cost"
        ]);

        for (index, quote) in quotation.quotes.iter().enumerate() {
            table.add_row(Self::quote_row(index, quote, currency));
        }

        table.add_row(row![
            b -> "TOTAL", "", "", "", "", "", "", "",
            br -> Self::format_money(quotation.total, currency)
        ]);

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
///
/// Amounts are emitted as strings so no precision is lost to JSON numbers.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_total(&self, quotation: &Quotation, currency: Option<&str>) -> String {
        let output = json!({
            "total": format_amount(quotation.total),
            "currency": currency,
            "interval_count": quotation.quotes.len(),
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }

    fn format_breakdown(&self, quotation: &Quotation, currency: Option<&str>) -> String {
        let output = json!({
            "intervals": quotation.quotes.iter().map(|q| json!({
                "start": q.interval.start().to_rfc3339(),
                "end": q.interval.end().to_rfc3339(),
                "units": {
                    "hours": q.units.hours,
                    "days": q.units.days,
                    "weeks": q.units.weeks,
                    "months": q.units.months,
                },
                "billed_as": q.choice.to_string(),
                "cost": format_amount(q.cost),
            })).collect::<Vec<_>>(),
            "total": format_amount(quotation.total),
            "currency": currency,
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }
}

/// Get the formatter matching the requested output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;
    use parkcost_core::{Interval, RateTable};
    use parkcost_pricing::PricingCalculator;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn sample_quotation() -> Quotation {
        let calculator = PricingCalculator::new(Arc::new(RateTable::reference("GBP").unwrap()));
        let start = Tz::UTC.with_ymd_and_hms(2015, 9, 10, 14, 0, 0).unwrap();
        let end = Tz::UTC.with_ymd_and_hms(2015, 9, 12, 14, 0, 0).unwrap();
        calculator
            .calculate_quotes(&[Interval::new(start, end)])
            .unwrap()
    }

    #[test]
    fn test_format_amount_has_two_digits() {
        assert_eq!(format_amount(dec!(15)), "15.00");
        assert_eq!(format_amount(dec!(9.5)), "9.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_table_total() {
        let formatter = TableFormatter;
        let quotation = sample_quotation();
        assert_eq!(formatter.format_total(&quotation, Some("GBP")), "15.00 GBP");
        assert_eq!(formatter.format_total(&quotation, None), "15.00");
    }

    #[test]
    fn test_table_breakdown() {
        let output = TableFormatter.format_breakdown(&sample_quotation(), Some("GBP"));
        assert!(output.contains("Billed As"));
        assert!(output.contains("2015-09-10 14:00"));
        assert!(output.contains("daily"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("15.00 GBP"));
    }

    #[test]
    fn test_json_total() {
        let output = JsonFormatter.format_total(&sample_quotation(), Some("GBP"));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total"], "15.00");
        assert_eq!(parsed["currency"], "GBP");
        assert_eq!(parsed["interval_count"], 1);
    }

    #[test]
    fn test_json_breakdown() {
        let output = JsonFormatter.format_breakdown(&sample_quotation(), None);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["intervals"][0]["units"]["days"], 3);
        assert_eq!(parsed["intervals"][0]["billed_as"], "daily");
        assert_eq!(parsed["intervals"][0]["cost"], "15.00");
        assert!(parsed["currency"].is_null());
    }

    #[test]
    fn test_empty_quotation() {
        let output = get_formatter(false).format_total(&Quotation::default(), Some("GBP"));
        assert_eq!(output, "0.00 GBP");
    }
}
