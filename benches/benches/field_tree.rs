// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use groundcover_field::{FieldQuadtree, FieldQuadtreeBuilder, SegmentDistance};
use kurbo::{Line, Point};

const DOMAIN: f64 = 256.0;

fn segment() -> SegmentDistance {
    SegmentDistance::new(Line::new((200.0, 200.0), (50.0, 200.0)))
}

fn build_tree(threshold: f64) -> FieldQuadtree {
    let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, DOMAIN).with_threshold(threshold);
    builder.add(segment().unsigned_field());
    builder.build()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tree_build");
    for &threshold in &[4.0, 1.0, 0.25] {
        group.bench_function(format!("segment_t{}", threshold), |b| {
            b.iter(|| {
                let tree = build_tree(black_box(threshold));
                black_box(tree.nodes().len());
            })
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tree_merge");
    let cross = SegmentDistance::new(Line::new((128.0, 20.0), (128.0, 236.0)));
    group.bench_function("second_segment_min", |b| {
        b.iter(|| {
            let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, DOMAIN).with_threshold(1.0);
            builder.add(segment().unsigned_field());
            builder.add(cross.unsigned_field());
            let tree = builder.build();
            black_box(tree.nodes().len());
        })
    });
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tree_sample");
    let tree = build_tree(0.25);
    let n = 256usize;
    group.throughput(Throughput::Elements((n * n) as u64));
    group.bench_function("dense_grid_256", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for y in 0..n {
                for x in 0..n {
                    acc += tree.sample(Point::new(x as f64, y as f64));
                }
            }
            black_box(acc);
        })
    });
    group.finish();
}

fn bench_direct_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_direct");
    let seg = segment();
    let field = seg.unsigned_field();
    let n = 256usize;
    group.throughput(Throughput::Elements((n * n) as u64));
    group.bench_function("dense_grid_256", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for y in 0..n {
                for x in 0..n {
                    acc += field(Point::new(x as f64, y as f64));
                }
            }
            black_box(acc);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_merge,
    bench_sample,
    bench_direct_field,
);
criterion_main!(benches);
