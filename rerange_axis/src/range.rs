// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis data ranges.

use smallvec::SmallVec;

/// Data bounds along one axis.
///
/// Either bound may be unknown (NaN), for instance when the data scan found
/// no finite values. Ranges are produced by the data layer or typed in by
/// the user; this crate only stores and discards them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range {
    lo: f64,
    hi: f64,
}

/// One [`Range`] per axis of a plot.
pub type Ranges = SmallVec<[Range; 3]>;

impl Range {
    /// A range with neither bound known.
    pub const UNKNOWN: Self = Self {
        lo: f64::NAN,
        hi: f64::NAN,
    };

    /// Creates a range from two bounds, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { lo: b, hi: a }
        } else {
            Self { lo: a, hi: b }
        }
    }

    /// Returns the lower bound (NaN if unknown).
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound (NaN if unknown).
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns both bounds if they are finite.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.is_finite().then_some((self.lo, self.hi))
    }

    /// Returns `true` if both bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
