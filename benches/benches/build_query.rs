// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble::{BBox, RTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, span: f64, max_size: f64, seed: u64) -> Vec<BBox> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * span;
            let y = rng.next_f64() * span;
            let w = rng.next_f64() * max_size;
            let h = rng.next_f64() * max_size;
            BBox::from_corners(&[x, y], &[x + w, y + h])
        })
        .collect()
}

fn bench_build_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = BBox::from_corners(&[100.0, 100.0], &[500.0, 500.0]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("insert_build_query_n{}", n), |b| {
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

        group.bench_function(format!("bulk_build_query_n{}", n), |b| {
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

        group.bench_function(format!("collides_n{}", n), |b| {
            let mut tree = RTree::default();
            tree.load(rects.clone());
            b.iter(|| black_box(tree.collides(&query)))
        });
    }
    group.finish();
}

fn bench_random_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let rects = gen_random_rects(4096, 4000.0, 40.0, 0x5eed);
    group.throughput(Throughput::Elements(1024));

    group.bench_function("remove_1024_of_4096", |b| {
        b.iter_batched(
            || {
                let mut tree = RTree::default();
                tree.load(rects.clone());
                (tree, rects[..1024].to_vec())
            },
            |(mut tree, victims)| {
                for v in &victims {
                    tree.remove(v);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build_and_query, bench_random_remove);
criterion_main!(benches);
