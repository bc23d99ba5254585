//! Benchmarks for the metrics calculator, scorer and screener.
//!
//! Run with: cargo bench -p navrisk-analytics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use navrisk_analytics::prelude::*;
use navrisk_core::{Date, NavSeries, SchemeInfo};
use navrisk_ext_file::InMemoryNavSource;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_series(days: usize, seed: u64) -> NavSeries {
    let start = Date::from_ymd(2015, 1, 1).unwrap();
    let mut nav = 10.0;
    let pairs: Vec<(Date, f64)> = (0..days)
        .map(|i| {
            let hash = simple_hash(seed, i as u64);
            let r = (hash % 400) as f64 / 10_000.0 - 0.0195;
            nav *= 1.0 + r;
            (start.add_days(i as i64), nav)
        })
        .collect();
    NavSeries::from_pairs(pairs).unwrap()
}

fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut h = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(i);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h
}

fn create_universe(size: usize) -> (InMemoryNavSource, Vec<SchemeInfo>) {
    let mut source = InMemoryNavSource::new();
    for i in 0..size {
        source = source.with_scheme(
            format!("{}", 100_000 + i),
            format!("Bench Fund {i} - Direct Growth"),
            create_series(1500, i as u64),
        );
    }
    let candidates = source.schemes().to_vec();
    (source, candidates)
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_compute_metrics(c: &mut Criterion) {
    let calculator = MetricsCalculator::default();
    let mut group = c.benchmark_group("compute_metrics");

    for days in [250usize, 1250, 2500, 5000].iter() {
        let series = create_series(*days, 7);
        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &series, |b, series| {
            b.iter(|| calculator.compute(black_box(series), None))
        });
    }
    group.finish();
}

fn bench_efficiency_score(c: &mut Criterion) {
    let metrics = MetricsCalculator::default()
        .compute(&create_series(1250, 3), None)
        .unwrap();
    let inputs = EfficiencyInputs::from_metrics(&metrics);

    c.bench_function("efficiency_score", |b| {
        b.iter(|| efficiency_score(black_box(&inputs)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let calculator = MetricsCalculator::default();
    let a = calculator.compute(&create_series(1250, 1), None).unwrap();
    let b_metrics = calculator.compute(&create_series(1250, 2), None).unwrap();
    let comparator = FundComparator::new();

    c.bench_function("compare_funds", |b| {
        b.iter(|| comparator.compare(black_box(&a), black_box(&b_metrics), "A", "B"))
    });
}

fn bench_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");
    group.sample_size(20);

    for size in [10usize, 50].iter() {
        let (source, candidates) = create_universe(*size);
        let sequential = FundScreener::new(source, EngineConfig::default());
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &candidates,
            |b, candidates| b.iter(|| sequential.screen(candidates, 3, 10, PlanType::Growth)),
        );

        let (source, candidates) = create_universe(*size);
        let parallel = FundScreener::new(source, EngineConfig::default().with_parallel(true));
        group.bench_with_input(
            BenchmarkId::new("parallel", size),
            &candidates,
            |b, candidates| b.iter(|| parallel.screen(candidates, 3, 10, PlanType::Growth)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_metrics,
    bench_efficiency_score,
    bench_compare,
    bench_screen
);
criterion_main!(benches);
