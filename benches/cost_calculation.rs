use chrono::{Duration, TimeZone};
use chrono_tz::Tz;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use parkcost::{BillableUnits, Interval, PricingCalculator, RateTable};
use std::sync::Arc;

fn create_test_intervals(count: usize) -> Vec<Interval> {
    let base = Tz::UTC.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let start = base + Duration::hours(i as i64 * 7);
            // Mix of hour, day, week and month length sessions
            let length = match i % 4 {
                0 => Duration::hours(3),
                1 => Duration::days(2),
                2 => Duration::days(16),
                _ => Duration::days(70),
            };
            Interval::new(start, start + length)
        })
        .collect()
}

fn benchmark_cost_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_calculation");
    let calculator = PricingCalculator::new(Arc::new(RateTable::reference("GBP").unwrap()));

    group.bench_function("billable_units", |b| {
        let interval = create_test_intervals(3).remove(2);
        b.iter(|| BillableUnits::from_interval(black_box(&interval)));
    });

    group.bench_function("quote_single_interval", |b| {
        let interval = create_test_intervals(3).remove(2);
        b.iter(|| calculator.quote(black_box(&interval)).unwrap());
    });

    for count in [10, 1_000, 100_000] {
        let intervals = create_test_intervals(count);
        group.bench_function(format!("calculate_{count}_intervals"), |b| {
            b.iter(|| calculator.calculate(black_box(&intervals)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cost_calculation);
criterion_main!(benches);
