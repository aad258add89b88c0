//! Benchmarks for pricer_optimiser.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_optimiser::bootstrapping::{RatesInstrument, SequentialBootstrapper};

/// Generate a deposit strip followed by semiannual swaps.
fn generate_instruments(count: usize) -> Vec<RatesInstrument> {
    (1..=count)
        .map(|i| {
            let tenor = i as f64 * 0.5;
            let rate = 0.03 + (i as f64) * 0.001;
            if tenor <= 1.0 {
                RatesInstrument::deposit(tenor, rate)
            } else {
                RatesInstrument::swap(tenor, rate)
            }
        })
        .collect()
}

fn benchmark_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");
    let bootstrapper = SequentialBootstrapper::with_defaults();

    for count in [4, 10, 20, 60] {
        let instruments = generate_instruments(count);
        group.bench_with_input(BenchmarkId::new("sequential", count), &instruments, |b, inst| {
            b.iter(|| bootstrapper.bootstrap(black_box(inst)))
        });
    }
    group.finish();
}

fn benchmark_bootstrap_unsorted(c: &mut Criterion) {
    let bootstrapper = SequentialBootstrapper::with_defaults();
    let mut instruments = generate_instruments(20);
    instruments.reverse();

    c.bench_function("bootstrap_reversed_20", |b| {
        b.iter(|| bootstrapper.bootstrap(black_box(&instruments)))
    });
}

criterion_group!(benches, benchmark_bootstrap, benchmark_bootstrap_unsorted);
criterion_main!(benches);
