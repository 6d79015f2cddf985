//! Puka Cuckoo Benchmarks
//!
//! This module contains benchmarks for the cuckoo hash table: filling a table,
//! membership queries, and unwinding insertions through the undo log.
//! The benchmarks are implemented using the Criterion framework, which provides
//! statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{PukaCuckooHash, SeededHashFamily};
use std::time::Duration;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i}")).collect()
}

/// A table filled to roughly `load` of its capacity.
fn filled_table(capacity: usize, load: f64) -> (PukaCuckooHash<String>, Vec<String>) {
    let mut table = PukaCuckooHash::with_capacity(SeededHashFamily::new(2), capacity);
    let keys = keys((capacity as f64 * load) as usize);
    for key in &keys {
        table.insert(key.clone());
    }
    (table, keys)
}

/// Benchmark insertion at increasing load factors
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("puka_cuckoo_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for load in [0.25, 0.5, 0.9] {
        let capacity = 1009;
        let count = (capacity as f64 * load) as usize;
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fill", load), &count, |b, &count| {
            let keys = keys(count);
            b.iter_batched(
                || PukaCuckooHash::<String>::with_capacity(SeededHashFamily::new(2), capacity),
                |mut table| {
                    for key in &keys {
                        black_box(table.insert(key.clone()));
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark membership queries for members and non-members
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("puka_cuckoo_find");
    group.measurement_time(Duration::from_secs(2));

    let (table, members) = filled_table(1009, 0.5);
    let missing: Vec<String> = (0..members.len()).map(|i| format!("absent-{i}")).collect();

    group.throughput(Throughput::Elements(members.len() as u64));
    group.bench_function("hit", |b| {
        b.iter(|| {
            for key in &members {
                black_box(table.find(key));
            }
        });
    });
    group.bench_function("miss", |b| {
        b.iter(|| {
            for key in &missing {
                black_box(table.find(key));
            }
        });
    });

    group.finish();
}

/// Benchmark rewinding every insertion of a filled table
fn bench_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("puka_cuckoo_undo");
    group.measurement_time(Duration::from_secs(2));

    for load in [0.5, 0.9] {
        group.bench_with_input(BenchmarkId::new("unwind", load), &load, |b, &load| {
            b.iter_batched(
                || filled_table(1009, load).0,
                |mut table| {
                    while table.undo() {}
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_insert, bench_find, bench_undo
}
criterion_main!(benches);
