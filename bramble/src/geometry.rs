// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pluggable geometry accessor: how the tree derives boxes from items.

use core::cmp::Ordering;

use crate::bounds::BBox;

/// Geometry accessor for items of type `T`.
///
/// The accessor is chosen once at construction and invoked through direct
/// calls, so a monomorphized implementation inlines into the hot paths. It
/// must be consistent: [`compare_min`](Geometry::compare_min) on `axis` must
/// agree with ordering the boxes returned by [`bbox`](Geometry::bbox) by
/// their minimum on that axis.
pub trait Geometry<T> {
    /// Number of axes the accessor operates in.
    fn dimension(&self) -> usize;

    /// Derive the bounding box of `item`.
    fn bbox(&self, item: &T) -> BBox;

    /// Order two items by their minimum coordinate on `axis`.
    fn compare_min(&self, axis: usize, a: &T, b: &T) -> Ordering;
}

/// Accessor for items that are bounding boxes themselves.
///
/// This is the ready-made accessor for the common case of indexing plain
/// rectangles: the item type is [`BBox`] and its derived box is a copy of
/// itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RectGeometry {
    dimension: usize,
}

impl RectGeometry {
    /// Accessor for flat-rect items over `dimension` axes.
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for RectGeometry {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Geometry<BBox> for RectGeometry {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bbox(&self, item: &BBox) -> BBox {
        item.clone()
    }

    fn compare_min(&self, axis: usize, a: &BBox, b: &BBox) -> Ordering {
        a.compare_min(axis, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_geometry_orders_by_axis_minimum() {
        let geom = RectGeometry::new(2);
        let a = BBox::from_corners(&[0.0, 5.0], &[1.0, 6.0]);
        let b = BBox::from_corners(&[2.0, 1.0], &[3.0, 2.0]);
        assert_eq!(geom.compare_min(0, &a, &b), Ordering::Less);
        assert_eq!(geom.compare_min(1, &a, &b), Ordering::Greater);
        assert_eq!(geom.bbox(&a), a);
        assert_eq!(geom.dimension(), 2);
    }
}
