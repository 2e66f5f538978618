use astral::aspects::{AspectCalculator, Orbs};
use astral::chart::{Chart, ChartSettings};
use astral::ephemeris::calculate_all;
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("classify", |b| {
        b.iter(|| calculator.classify(black_box(118.5)))
    });
}

fn bench_calculate_aspects(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap();
    let positions = calculate_all(&dt);

    let mut group = c.benchmark_group("calculate_aspects");
    for (name, orbs) in [("default", Orbs::DEFAULT), ("tight", Orbs::TIGHT)] {
        let calculator = AspectCalculator::with_orbs(orbs);
        group.bench_function(name, |b| {
            b.iter(|| calculator.calculate_aspects(black_box(&positions)))
        });
    }
    group.finish();
}

fn bench_full_chart(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap();
    let settings = ChartSettings::default();

    c.bench_function("chart_calculate", |b| {
        b.iter(|| Chart::calculate(black_box(dt), 48.8566, 2.3522, "Paris", &settings))
    });
}

criterion_group!(benches, bench_classify, bench_calculate_aspects, bench_full_chart);
criterion_main!(benches);
