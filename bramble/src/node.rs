// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive node model and its raw import/export representation.

use alloc::vec::Vec;

use crate::bounds::BBox;
use crate::geometry::Geometry;

/// One tree node.
///
/// This type doubles as the raw import/export representation: all fields are
/// public plain data, and [`import`](crate::RTree::import) adopts a tree of
/// these without structural validation.
///
/// Invariants maintained by the tree (and assumed, not checked, on import):
/// - `bbox` equals the exact union of the children's boxes, never a loose
///   superset.
/// - Leaves ([`Children::Items`]) have `height == 1`; an internal node's
///   children all have `height == node.height - 1`.
/// - Every node except the root holds between `min_entries` and
///   `max_entries` children; the root may be underfull.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    /// Child entries: items for a leaf, nodes otherwise.
    pub children: Children<T>,
    /// Distance to the leaf level; leaves are at height 1.
    pub height: usize,
    /// Exact union of the children's bounding boxes.
    pub bbox: BBox,
}

/// Children of a node: payload items at the leaf level, nodes above it.
///
/// Order is insertion/construction order and carries no meaning beyond the
/// temporary sort order used while splitting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Children<T> {
    /// Leaf payload items.
    Items(Vec<T>),
    /// Child nodes, one level below.
    Nodes(Vec<Node<T>>),
}

impl<T> Node<T> {
    /// A fresh empty leaf for `dimension` axes.
    pub fn new_leaf(dimension: usize) -> Self {
        Self {
            children: Children::Items(Vec::new()),
            height: 1,
            bbox: BBox::empty(dimension),
        }
    }

    /// Whether this node holds items directly.
    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Items(_))
    }

    /// Number of direct children (items or nodes).
    pub fn child_count(&self) -> usize {
        match &self.children {
            Children::Items(items) => items.len(),
            Children::Nodes(nodes) => nodes.len(),
        }
    }
}

/// Clamped tree parameters, fixed at construction.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits {
    pub(crate) max_entries: usize,
    pub(crate) min_entries: usize,
    pub(crate) dimension: usize,
}

/// Box of child `index`, derived for items and copied for nodes.
pub(crate) fn child_bbox<T, G: Geometry<T>>(geom: &G, node: &Node<T>, index: usize) -> BBox {
    match &node.children {
        Children::Items(items) => geom.bbox(&items[index]),
        Children::Nodes(nodes) => nodes[index].bbox.clone(),
    }
}

/// Union of the boxes of children in `start..end`.
pub(crate) fn dist_bbox<T, G: Geometry<T>>(
    geom: &G,
    node: &Node<T>,
    start: usize,
    end: usize,
    dimension: usize,
) -> BBox {
    let mut acc = BBox::empty(dimension);
    match &node.children {
        Children::Items(items) => {
            for item in &items[start..end] {
                acc.extend(&geom.bbox(item));
            }
        }
        Children::Nodes(nodes) => {
            for child in &nodes[start..end] {
                acc.extend(&child.bbox);
            }
        }
    }
    acc
}

/// Recompute `node.bbox` from scratch as the union of all children.
pub(crate) fn calc_bbox<T, G: Geometry<T>>(geom: &G, node: &mut Node<T>, dimension: usize) {
    node.bbox = dist_bbox(geom, node, 0, node.child_count(), dimension);
}
