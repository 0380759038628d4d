// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk-load a large batch of rectangles and run window queries against it.
//!
//! Run with `RUST_LOG=debug` to watch the structural events the tree logs.

use bramble::{BBox, RTree};

struct Rng(u64);

impl Rng {
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

fn main() {
    env_logger::init();

    let mut rng = Rng(0xb1b2_b3b4);
    let rects: Vec<BBox> = (0..10_000)
        .map(|_| {
            let x = rng.next_f64() * 10_000.0;
            let y = rng.next_f64() * 10_000.0;
            let w = rng.next_f64() * 50.0;
            let h = rng.next_f64() * 50.0;
            BBox::from_corners(&[x, y], &[x + w, y + h])
        })
        .collect();

    let mut tree = RTree::default();
    tree.load(rects);
    log::info!(
        "indexed {} rectangles, tree height {}",
        tree.len(),
        tree.height()
    );

    for window in [
        BBox::from_corners(&[0.0, 0.0], &[500.0, 500.0]),
        BBox::from_corners(&[4_000.0, 4_000.0], &[6_000.0, 6_000.0]),
        BBox::from_corners(&[9_900.0, 9_900.0], &[10_100.0, 10_100.0]),
    ] {
        let hits = tree.search(&window);
        println!(
            "window {:?} -> {} rectangles (collides: {})",
            window.coords(),
            hits.len(),
            tree.collides(&window)
        );
    }

    // A window outside everything answers without touching any child.
    let far = BBox::from_corners(&[50_000.0, 50_000.0], &[50_001.0, 50_001.0]);
    println!("far window collides: {}", tree.collides(&far));
}
