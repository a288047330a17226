// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-plot-type hooks consulted by [`RangeDecision`](crate::RangeDecision).

use core::fmt;

use rerange_layer::{IdentityMode, Layer};

/// Plot-type specific parts of the re-ranging decision.
///
/// `P` is the plot type's profile: the axis configuration (scales, flips,
/// labels, projection) chosen by the user.
///
/// Only [`log_changed`](RangePolicy::log_changed) is required; the other
/// hooks default to "never".
pub trait RangePolicy<P> {
    /// How layers are keyed into dataset identities.
    fn identity_mode(&self) -> IdentityMode {
        IdentityMode::RangeCoords
    }

    /// Returns `true` if an axis scale changed in a way that makes the
    /// current data ranges meaningless.
    ///
    /// This wins over the axis lock.
    fn log_changed(&self, old: &P, new: &P) -> bool;

    /// Returns `true` if some other profile change must discard the ranges,
    /// even when the axes are locked.
    fn force_clear_range(&self, old: &P, new: &P) -> bool {
        let _ = (old, new);
        false
    }

    /// Returns `true` if layer styling changed enough to need new ranges.
    ///
    /// Only consulted when nothing else already forces re-ranging and the
    /// axes are not locked.
    fn style_invalidation(&self, old_layers: &[Layer], new_layers: &[Layer]) -> bool {
        let _ = (old_layers, new_layers);
        false
    }
}

impl<P, R: RangePolicy<P> + ?Sized> RangePolicy<P> for &R {
    fn identity_mode(&self) -> IdentityMode {
        (**self).identity_mode()
    }

    fn log_changed(&self, old: &P, new: &P) -> bool {
        (**self).log_changed(old, new)
    }

    fn force_clear_range(&self, old: &P, new: &P) -> bool {
        (**self).force_clear_range(old, new)
    }

    fn style_invalidation(&self, old_layers: &[Layer], new_layers: &[Layer]) -> bool {
        (**self).style_invalidation(old_layers, new_layers)
    }
}

/// Policy built from a scale-change closure, for ad hoc plot types.
///
/// ```
/// use rerange_axis::{FnPolicy, RangePolicy};
///
/// // Profile is just "is the y axis logarithmic".
/// let policy = FnPolicy::new(|old: &bool, new: &bool| old != new);
/// assert!(policy.log_changed(&false, &true));
/// assert!(!policy.force_clear_range(&false, &true));
/// ```
pub struct FnPolicy<F> {
    log_changed: F,
    mode: IdentityMode,
}

impl<F> FnPolicy<F> {
    /// Creates a policy using range-coordinate identities.
    pub fn new(log_changed: F) -> Self {
        Self {
            log_changed,
            mode: IdentityMode::RangeCoords,
        }
    }

    /// Sets the identity mode.
    #[must_use]
    pub fn with_identity_mode(mut self, mode: IdentityMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<F> fmt::Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<P, F: Fn(&P, &P) -> bool> RangePolicy<P> for FnPolicy<F> {
    fn identity_mode(&self) -> IdentityMode {
        self.mode
    }

    fn log_changed(&self, old: &P, new: &P) -> bool {
        (self.log_changed)(old, new)
    }
}
