//! Benchmarks comparing the three classification strategies.
//!
//! Run with: `cargo bench -p generacion-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use generacion_core::{Age, BirthYear, ClassificationReport, Strategy};
use std::hint::black_box;

// =============================================================================
// STRATEGY BENCHMARKS
// =============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for year in [1825i64, 1940, 1975, 1995] {
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), year),
                &BirthYear(year),
                |b, &year| {
                    b.iter(|| black_box(strategy.classify(black_box(year))));
                },
            );
        }
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let ages: Vec<Age> = (0..=120).filter_map(|y| Age::new(y).ok()).collect();

    c.bench_function("report_all_ages", |b| {
        b.iter(|| {
            for age in &ages {
                black_box(ClassificationReport::classify(*age));
            }
        });
    });
}

criterion_group!(benches, bench_strategies, bench_report);
criterion_main!(benches);
