// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that need `std` or `libm`.
//!
//! Only the selection primitive's sampling bounds use these; everything else
//! in the crate is plain arithmetic and comparisons.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("bramble requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub(crate) fn ln(x: f64) -> f64 {
        x.ln()
    }

    #[inline]
    pub(crate) fn exp(x: f64) -> f64 {
        x.exp()
    }

    #[inline]
    pub(crate) fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline]
    pub(crate) fn ln(x: f64) -> f64 {
        libm::log(x)
    }

    #[inline]
    pub(crate) fn exp(x: f64) -> f64 {
        libm::exp(x)
    }

    #[inline]
    pub(crate) fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
pub(crate) use imp::{exp, ln, sqrt};
