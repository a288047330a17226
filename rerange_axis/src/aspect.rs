// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared behavior of aspects with a horizontal and a vertical data span.

use crate::range::Range;

/// An aspect whose visible region is a data-space rectangle.
///
/// Multi-zone gangers use this to copy one zone's horizontal or vertical
/// extent onto its neighbours.
pub trait PlanarAspect: Clone {
    /// Returns the visible horizontal data interval as `(lo, hi)`.
    fn x_span(&self) -> (f64, f64);

    /// Returns the visible vertical data interval as `(lo, hi)`.
    fn y_span(&self) -> (f64, f64);

    /// Returns a copy with a different horizontal interval.
    #[must_use]
    fn with_x_span(&self, lo: f64, hi: f64) -> Self;

    /// Returns a copy with a different vertical interval.
    #[must_use]
    fn with_y_span(&self, lo: f64, hi: f64) -> Self;
}

/// Picks a bound for one end of an axis: the user's explicit value if it is
/// finite, else the data range's.
pub(crate) fn pick_bound(user: f64, data: Option<f64>) -> Option<f64> {
    if user.is_finite() {
        Some(user)
    } else {
        data.filter(|d| d.is_finite())
    }
}

/// Resolves one axis from explicit bounds and an optional data range.
///
/// Returns `None` unless both ends are known and form a non-empty interval.
pub(crate) fn resolve_axis(
    user_lo: f64,
    user_hi: f64,
    data: Option<&Range>,
) -> Option<(f64, f64)> {
    let lo = pick_bound(user_lo, data.map(Range::lo))?;
    let hi = pick_bound(user_hi, data.map(Range::hi))?;
    (lo < hi).then_some((lo, hi))
}
