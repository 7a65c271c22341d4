//! Lookup benchmarks: the crate's reason to exist, measured.
//!
//! Compares a point lookup through the B-tree against the full-scan
//! baseline at growing data volumes, plus the cost of building the index
//! in the first place. The scan's cost grows with the row count; the
//! index's barely moves.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use indexbench::bench::{populate, synthesize_email};
use indexbench::FullScanEngine;

const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for &count in &SIZES {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let pop = populate(black_box(count)).unwrap();
                black_box(pop.index.size())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_lookup");

    for &count in &SIZES {
        let pop = populate(count).unwrap();
        // Target the middle row: the scan's average case
        let target = synthesize_email(count / 2);

        group.bench_with_input(
            BenchmarkId::new("full_scan", count),
            &target,
            |b, target| {
                b.iter(|| FullScanEngine::find_by_email(&pop.store, black_box(target)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("btree_index", count),
            &target,
            |b, target| {
                b.iter(|| pop.index.search(black_box(target.as_str())));
            },
        );
    }

    group.finish();
}

fn bench_lookup_absent(c: &mut Criterion) {
    let mut group = c.benchmark_group("absent_lookup");

    for &count in &SIZES {
        let pop = populate(count).unwrap();
        // Never generated, so the scan pays for the whole store
        let target = synthesize_email(count + 1);

        group.bench_with_input(
            BenchmarkId::new("full_scan", count),
            &target,
            |b, target| {
                b.iter(|| FullScanEngine::find_by_email(&pop.store, black_box(target)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("btree_index", count),
            &target,
            |b, target| {
                b.iter(|| pop.index.search(black_box(target.as_str())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup, bench_lookup_absent);
criterion_main!(benches);
