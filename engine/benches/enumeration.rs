//! Criterion benchmarks for series tree construction and traversal

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use series_engine::{build_tree, collect_outcomes, group_by_length, stats};

fn benchmark_build_tree(c: &mut Criterion) {
    c.bench_function("build_tree_4_wins", |b| {
        b.iter(|| build_tree(black_box(4)).expect("valid size"))
    });
    c.bench_function("build_tree_8_wins", |b| {
        b.iter(|| build_tree(black_box(8)).expect("valid size"))
    });
}

fn benchmark_collect_outcomes(c: &mut Criterion) {
    let tree = build_tree(8).expect("valid size");

    c.bench_function("collect_outcomes_8_wins", |b| {
        b.iter(|| collect_outcomes(black_box(&tree)).count())
    });

    c.bench_function("group_and_stats_8_wins", |b| {
        b.iter_batched(
            || collect_outcomes(&tree).collect::<Vec<_>>(),
            |outcomes| {
                let groups = group_by_length(outcomes.iter().copied());
                let summary = stats(8, outcomes);
                black_box((groups, summary))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, benchmark_build_tree, benchmark_collect_outcomes);
criterion_main!(benches);
