// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bramble --heading-base-level=0

//! Bramble: a balanced, bulk-loadable spatial index over axis-aligned
//! bounding boxes in a fixed (but arbitrary) number of dimensions.
//!
//! The in-memory analogue of a B-tree for multi-dimensional range data:
//!
//! - Insert items one by one with overlap-minimizing node splits, or pack a
//!   whole batch at once with [`RTree::load`]'s sort-tile-recursive loader.
//! - Query overlap with [`RTree::search`] and [`RTree::collides`]; both are
//!   iterative traversals that short-circuit on full containment.
//! - Remove items with [`RTree::remove`]; emptied nodes are pruned and
//!   ancestor boxes recomputed exactly.
//! - Round-trip the raw node tree with [`RTree::export`] and
//!   [`RTree::import`] (no validation on import).
//!
//! Tree depth stays logarithmic in the item count: all leaves sit at the
//! same height, and every node except the root keeps between `min_entries`
//! and `max_entries` children.
//!
//! How items map to boxes is pluggable: a [`Geometry`] accessor chosen at
//! construction derives each item's box and orders items along an axis. The
//! ready-made [`RectGeometry`] indexes plain [`BBox`] values directly.
//!
//! # Example
//!
//! ```rust
//! use bramble::{BBox, RTree};
//!
//! let mut tree = RTree::default();
//! tree.insert(BBox::from_corners(&[0.0, 0.0], &[10.0, 10.0]));
//! tree.insert(BBox::from_corners(&[5.0, 5.0], &[15.0, 15.0]));
//!
//! let hits = tree.search(&BBox::from_corners(&[12.0, 12.0], &[20.0, 20.0]));
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! Higher dimensions and node capacity are configured at construction:
//!
//! ```rust
//! use bramble::{BBox, Config, RTree, RectGeometry};
//!
//! let mut tree = RTree::with_config(
//!     Config { max_entries: 16, dimension: 3 },
//!     RectGeometry::new(3),
//! )
//! .unwrap();
//! tree.insert(BBox::from_corners(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]));
//! assert!(tree.collides(&BBox::from_corners(&[0.5, 0.5, 0.5], &[2.0, 2.0, 2.0])));
//! ```
//!
//! ## Loading versus inserting
//!
//! Bulk loading a batch is roughly an order of magnitude faster than
//! inserting the same items one by one, and it produces better-filled nodes
//! (so later queries touch fewer of them). Loading into a non-empty tree
//! merges the packed subtree at the matching level; when the incoming data
//! would dominate the existing tree, the cheaper path is to collect
//! everything and rebuild with one `load`.
//!
//! ## Float semantics
//!
//! Coordinates are `f64` and assumed free of NaN; debug builds may assert.
//! The empty box is `min = +∞, max = -∞` per axis, so it unions to whatever
//! it is extended with and never intersects anything.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bounds;
mod bulk;
pub mod error;
pub mod geometry;
mod math;
pub mod node;
pub mod select;
mod split;
pub mod tree;

pub use bounds::BBox;
pub use error::Error;
pub use geometry::{Geometry, RectGeometry};
pub use node::{Children, Node};
pub use tree::{Config, RTree};
