// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow resolution: the overlap-minimizing node split.

use crate::bounds::BBox;
use crate::geometry::Geometry;
use crate::node::{Children, Limits, Node, calc_bbox, child_bbox, dist_bbox};

/// Split an overfull node in two, returning the new right sibling.
///
/// The split axis is the one whose sorted order yields the smallest summed
/// margin over all valid distributions (favoring elongated, non-overlapping
/// partitions); the split index within that order minimizes the pairwise
/// overlap area of the two halves, tie-broken by smaller combined area.
/// Both resulting boxes are recomputed from scratch.
pub(crate) fn split_node<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    node: &mut Node<T>,
) -> Node<T> {
    let count = node.child_count();
    let m = limits.min_entries;
    debug_assert!(count > limits.max_entries, "split requires overflow");

    choose_split_axis(geom, limits, node, m, count);
    let index = choose_split_index(geom, limits, node, m, count);

    let children = match &mut node.children {
        Children::Items(items) => Children::Items(items.split_off(index)),
        Children::Nodes(nodes) => Children::Nodes(nodes.split_off(index)),
    };
    let mut sibling = Node {
        children,
        height: node.height,
        bbox: BBox::empty(limits.dimension),
    };
    calc_bbox(geom, node, limits.dimension);
    calc_bbox(geom, &mut sibling, limits.dimension);
    sibling
}

/// Sort the children by the axis with minimal total distribution margin.
fn choose_split_axis<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    node: &mut Node<T>,
    m: usize,
    count: usize,
) {
    let mut best_axis = 0;
    let mut best_margin = f64::INFINITY;
    for axis in 0..limits.dimension {
        sort_by_axis_min(geom, node, axis);
        let margin = all_dist_margin(geom, limits, node, m, count);
        if margin < best_margin {
            best_margin = margin;
            best_axis = axis;
        }
    }
    // The children are currently sorted by the last axis tried.
    if best_axis != limits.dimension - 1 {
        sort_by_axis_min(geom, node, best_axis);
    }
}

fn sort_by_axis_min<T, G: Geometry<T>>(geom: &G, node: &mut Node<T>, axis: usize) {
    match &mut node.children {
        Children::Items(items) => items.sort_by(|a, b| geom.compare_min(axis, a, b)),
        Children::Nodes(nodes) => nodes.sort_by(|a, b| a.bbox.compare_min(axis, &b.bbox)),
    }
}

/// Total margin of all valid left/right distributions in the current order.
///
/// Both running boxes are grown incrementally so each distribution costs
/// O(dimension), not a recomputation.
fn all_dist_margin<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    node: &Node<T>,
    m: usize,
    count: usize,
) -> f64 {
    let dim = limits.dimension;
    let mut left = dist_bbox(geom, node, 0, m, dim);
    let mut right = dist_bbox(geom, node, count - m, count, dim);
    let mut margin = left.margin() + right.margin();

    for i in m..count - m {
        left.extend(&child_bbox(geom, node, i));
        margin += left.margin();
    }
    for i in (m..count - m).rev() {
        right.extend(&child_bbox(geom, node, i));
        margin += right.margin();
    }
    margin
}

/// Split index in the valid range minimizing overlap, then combined area.
fn choose_split_index<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    node: &Node<T>,
    m: usize,
    count: usize,
) -> usize {
    let dim = limits.dimension;
    let mut index = count - m;
    let mut min_overlap = f64::INFINITY;
    let mut min_area = f64::INFINITY;

    for i in m..=count - m {
        let bbox1 = dist_bbox(geom, node, 0, i, dim);
        let bbox2 = dist_bbox(geom, node, i, count, dim);
        let overlap = bbox1.intersection_area(&bbox2);
        let area = bbox1.area() + bbox2.area();

        if overlap < min_overlap {
            min_overlap = overlap;
            index = i;
            min_area = if area < min_area { area } else { min_area };
        } else if overlap == min_overlap && area < min_area {
            min_area = area;
            index = i;
        }
    }
    index
}
