//! parkcost - Price parking sessions against tiered rates

use clap::Parser;
use parkcost::{
    PricingCalculator, Result, cli::Cli, input::parse_intervals, output::get_formatter,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the result.
    // --verbose overrides RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("parkcost=debug,parkcost_core=debug,parkcost_pricing=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let rate_table = Arc::new(cli.rates.to_rate_table()?);
    let tz_config = cli.timezone_args.to_config()?;
    info!(
        "Loaded {} rates, using timezone: {}",
        rate_table.len(),
        tz_config.display_name()
    );

    let intervals = parse_intervals(&cli.read_dates()?, &tz_config)?;
    info!("Pricing {} intervals", intervals.len());

    let calculator = PricingCalculator::new(rate_table);
    let quotation = calculator.calculate_quotes(&intervals)?;

    let formatter = get_formatter(cli.json);
    let currency = calculator.rate_table().currency_code();
    if cli.breakdown {
        println!("{}", formatter.format_breakdown(&quotation, currency));
    } else {
        println!("{}", formatter.format_total(&quotation, currency));
    }

    Ok(())
}
