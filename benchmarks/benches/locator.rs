use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use benchmarks::generate_mixed_terminators;
use pointer::locator::core::{line_range, lines};

fn bench_locating(c: &mut Criterion) {
    let mut group = c.benchmark_group("locator");

    let src = generate_mixed_terminators(10_000);

    group.bench_function("line_range_middle", |b| {
        let position = src.len() / 2;
        b.iter(|| black_box(line_range(&src, position).unwrap()));
    });

    group.bench_function("walk_all_lines", |b| {
        b.iter(|| black_box(lines(&src).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_locating);
criterion_main!(benches);
