// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree construction.

use thiserror::Error;

/// Errors reported when building a tree from a [`Config`](crate::Config).
///
/// Construction is the only fallible operation: a misconfigured geometry
/// accessor is a hard failure, while runtime misuse (removing an absent item,
/// loading an empty batch) is a defensive no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The accessor reports fewer than two axes.
    #[error("geometry accessor reports dimension {0}, but at least 2 axes are required")]
    InvalidDimension(usize),

    /// The configured dimension disagrees with the accessor's.
    #[error("configured dimension {config} does not match accessor dimension {accessor}")]
    DimensionMismatch {
        /// Dimension requested in the configuration (after clamping).
        config: usize,
        /// Dimension the geometry accessor operates in.
        accessor: usize,
    },
}
