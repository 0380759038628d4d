// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry kernel: axis-aligned bounding boxes in `N` dimensions.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Axis-aligned bounding box over a fixed number of axes.
///
/// Stored as a flat vector of length `2 * dimension`: the first `dimension`
/// entries are per-axis minima, the rest per-axis maxima. A degenerate box
/// (zero extent on some axis) is legal. The [empty](BBox::empty) box has
/// `min = +∞` and `max = -∞` on every axis, so extending it with any box
/// yields that box and it never reports an intersection.
///
/// Coordinates are `f64` and assumed free of NaN; debug builds may assert.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BBox {
    coords: Vec<f64>,
}

impl BBox {
    /// Create the empty box for `dimension` axes.
    ///
    /// Always constructs a fresh value; there is no shared template.
    pub fn empty(dimension: usize) -> Self {
        let mut coords = Vec::with_capacity(2 * dimension);
        coords.resize(dimension, f64::INFINITY);
        coords.resize(2 * dimension, f64::NEG_INFINITY);
        Self { coords }
    }

    /// Create a box from per-axis minima and maxima.
    ///
    /// The two slices must have equal length (the dimension).
    pub fn from_corners(mins: &[f64], maxs: &[f64]) -> Self {
        debug_assert_eq!(mins.len(), maxs.len(), "corner slices must match in length");
        let mut coords = Vec::with_capacity(mins.len() + maxs.len());
        coords.extend_from_slice(mins);
        coords.extend_from_slice(maxs);
        Self { coords }
    }

    /// Create a box from its raw flat representation, minima then maxima.
    pub fn from_coords(coords: Vec<f64>) -> Self {
        debug_assert_eq!(coords.len() % 2, 0, "flat representation has 2*dimension entries");
        Self { coords }
    }

    /// The raw flat representation, minima then maxima.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.coords.len() / 2
    }

    /// Minimum coordinate on `axis`.
    #[inline]
    pub fn min(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    /// Maximum coordinate on `axis`.
    #[inline]
    pub fn max(&self, axis: usize) -> f64 {
        self.coords[self.dimension() + axis]
    }

    /// Order two boxes by their minimum coordinate on `axis`.
    pub fn compare_min(&self, axis: usize, other: &Self) -> Ordering {
        self.min(axis)
            .partial_cmp(&other.min(axis))
            .unwrap_or(Ordering::Equal)
    }

    /// Grow this box to the union of itself and `other`.
    pub fn extend(&mut self, other: &Self) {
        let dim = self.dimension();
        debug_assert_eq!(dim, other.dimension(), "boxes must share a dimension");
        for axis in 0..dim {
            self.coords[axis] = self.coords[axis].min(other.coords[axis]);
            self.coords[dim + axis] = self.coords[dim + axis].max(other.coords[dim + axis]);
        }
    }

    /// Product of per-axis extents, each clamped at zero.
    pub fn area(&self) -> f64 {
        let dim = self.dimension();
        let mut acc = 1.0;
        for axis in 0..dim {
            acc *= (self.max(axis) - self.min(axis)).max(0.0);
        }
        acc
    }

    /// Sum of per-axis extents, each clamped at zero.
    ///
    /// A cheap perimeter proxy used to rank split axes without computing
    /// volume.
    pub fn margin(&self) -> f64 {
        let dim = self.dimension();
        let mut acc = 0.0;
        for axis in 0..dim {
            acc += (self.max(axis) - self.min(axis)).max(0.0);
        }
        acc
    }

    /// Marginal cost of growing this box to also cover `other`:
    /// `area(union) - area(self)`. Allocates nothing.
    pub fn enlargement(&self, other: &Self) -> f64 {
        let dim = self.dimension();
        let mut union_area = 1.0;
        for axis in 0..dim {
            let lo = self.min(axis).min(other.min(axis));
            let hi = self.max(axis).max(other.max(axis));
            union_area *= (hi - lo).max(0.0);
        }
        union_area - self.area()
    }

    /// Product of per-axis overlap lengths, zero as soon as any axis is
    /// disjoint.
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let dim = self.dimension();
        let mut acc = 1.0;
        for axis in 0..dim {
            let lo = self.min(axis).max(other.min(axis));
            let hi = self.max(axis).min(other.max(axis));
            if hi <= lo {
                return 0.0;
            }
            acc *= hi - lo;
        }
        acc
    }

    /// Whether `other` lies entirely within this box on every axis.
    pub fn contains(&self, other: &Self) -> bool {
        let dim = self.dimension();
        (0..dim).all(|axis| self.min(axis) <= other.min(axis) && other.max(axis) <= self.max(axis))
    }

    /// Whether no axis separates this box from `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        let dim = self.dimension();
        (0..dim).all(|axis| self.min(axis) <= other.max(axis) && other.min(axis) <= self.max(axis))
    }
}
