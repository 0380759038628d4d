// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk construction: sort-tile-recursive packing over the selection
//! primitive.

use alloc::vec::Vec;

use crate::bounds::BBox;
use crate::geometry::Geometry;
use crate::node::{Children, Limits, Node, calc_bbox};
use crate::select::multi_select;

/// Build a packed, balanced tree from `items`.
///
/// The caller guarantees `items` is non-empty; batches smaller than
/// `min_entries` take the one-by-one insertion path instead.
pub(crate) fn build_tree<T, G: Geometry<T>>(geom: &G, limits: Limits, items: Vec<T>) -> Node<T> {
    debug_assert!(!items.is_empty(), "bulk build needs at least one item");
    build(geom, limits, items, 0, 0)
}

/// One level of the recursive tiling.
///
/// `height == 0` marks the top-level call, which computes the target height
/// and widens the root fan-out to maximize fill. The tiling axes rotate per
/// level so the tiles stay roughly hyper-cubic in any dimension; with two
/// axes this degenerates to the classic first-axis/second-axis alternation.
/// Recursion depth is the tree height, bounded by O(log n).
fn build<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    mut items: Vec<T>,
    height: usize,
    axis: usize,
) -> Node<T> {
    let n = items.len();
    let dim = limits.dimension;

    if n <= limits.max_entries {
        let mut leaf = Node {
            children: Children::Items(items),
            height: 1,
            bbox: BBox::empty(dim),
        };
        calc_bbox(geom, &mut leaf, dim);
        return leaf;
    }

    let (height, fanout) = if height == 0 {
        let h = target_height(n, limits.max_entries);
        // Fan-out of the root node to maximize leaf fill at the target height.
        (h, n.div_ceil(pow_below(limits.max_entries, h)))
    } else {
        (height, limits.max_entries)
    };

    let inner_group = n.div_ceil(fanout);
    let outer_group = isqrt_ceil(fanout) * inner_group;
    let outer_axis = axis;
    let inner_axis = (axis + 1) % dim;
    let child_axis = (axis + 2) % dim;

    multi_select(&mut items, outer_group, &mut |a, b| {
        geom.compare_min(outer_axis, a, b)
    });

    // Take slabs from the tail so each tile is carved off as an owned vector;
    // children are assembled in reverse and flipped once at the end.
    let mut children: Vec<Node<T>> = Vec::with_capacity(fanout);
    let outer_starts: Vec<usize> = (0..n).step_by(outer_group).collect();
    for &start in outer_starts.iter().rev() {
        let mut slab = items.split_off(start);
        multi_select(&mut slab, inner_group, &mut |a, b| {
            geom.compare_min(inner_axis, a, b)
        });

        let inner_starts: Vec<usize> = (0..slab.len()).step_by(inner_group).collect();
        for &tile_start in inner_starts.iter().rev() {
            let tile = slab.split_off(tile_start);
            children.push(build(geom, limits, tile, height - 1, child_axis));
        }
    }
    children.reverse();

    let mut node = Node {
        children: Children::Nodes(children),
        height,
        bbox: BBox::empty(dim),
    };
    calc_bbox(geom, &mut node, dim);
    node
}

/// Smallest height whose packed capacity covers `n` items.
fn target_height(n: usize, max_entries: usize) -> usize {
    let mut height = 1;
    let mut capacity = max_entries;
    while capacity < n {
        capacity = capacity.saturating_mul(max_entries);
        height += 1;
    }
    height
}

/// `max_entries^(height - 1)`: the capacity of one subtree below the root.
fn pow_below(max_entries: usize, height: usize) -> usize {
    let mut acc = 1_usize;
    for _ in 1..height {
        acc = acc.saturating_mul(max_entries);
    }
    acc
}

fn isqrt_ceil(n: usize) -> usize {
    let mut g = 1_usize;
    while g * g < n {
        g += 1;
    }
    g
}
