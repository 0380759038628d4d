// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use bramble::{BBox, RTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree as RStarTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<BBox> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(BBox::from_corners(&[x0, y0], &[x0 + cell, y0 + cell]));
        }
    }
    out
}

fn to_rstar_rects(v: &[BBox]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min(0), r.min(1)], [r.max(0), r.max(1)]))
        .collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("external_compare");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = BBox::from_corners(&[100.0, 100.0], &[500.0, 500.0]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("bramble_build_query_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let mut tree = RTree::default();
                    for r in rects {
                        tree.insert(r);
                    }
                    let hits: usize = tree.search(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("bramble_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let mut tree = RTree::default();
                    tree.load(rects);
                    let hits: usize = tree.search(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RStarTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.min(0), query.min(1)],
                        [query.max(0), query.max(1)],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
