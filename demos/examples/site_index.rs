// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index custom payloads through a custom geometry accessor, in three
//! dimensions: sensor sites keyed by their position.

use std::cmp::Ordering;

use bramble::{BBox, Config, Geometry, RTree};

#[derive(Clone, Debug, PartialEq)]
struct Site {
    name: &'static str,
    position: [f64; 3],
}

/// Derives a degenerate (point) box from each site's position.
#[derive(Copy, Clone, Debug)]
struct SiteGeometry;

impl Geometry<Site> for SiteGeometry {
    fn dimension(&self) -> usize {
        3
    }

    fn bbox(&self, item: &Site) -> BBox {
        BBox::from_corners(&item.position, &item.position)
    }

    fn compare_min(&self, axis: usize, a: &Site, b: &Site) -> Ordering {
        a.position[axis]
            .partial_cmp(&b.position[axis])
            .unwrap_or(Ordering::Equal)
    }
}

fn main() {
    env_logger::init();

    let mut tree = RTree::with_config(
        Config {
            max_entries: 9,
            dimension: 3,
        },
        SiteGeometry,
    )
    .expect("accessor and configuration agree on three axes");

    tree.insert(Site {
        name: "valley",
        position: [10.0, 20.0, 120.0],
    });
    tree.insert(Site {
        name: "ridge",
        position: [12.0, 21.0, 870.0],
    });
    tree.insert(Site {
        name: "summit",
        position: [11.0, 19.0, 1430.0],
    });

    // Same ground footprint, restricted altitude band.
    let band = BBox::from_corners(&[0.0, 0.0, 500.0], &[100.0, 100.0, 1000.0]);
    for site in tree.search(&band) {
        println!("within the 500-1000m band: {}", site.name);
    }

    let ridge = Site {
        name: "ridge",
        position: [12.0, 21.0, 870.0],
    };
    let removed = tree.remove(&ridge);
    println!("removed ridge: {removed}; {} sites left", tree.len());
}
