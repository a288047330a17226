// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram plots: plane axes whose vertical extent depends on binning.

use rerange_layer::{BinSizer, Layer, Normalisation};

use crate::plane::{PlanePolicy, PlaneProfile};
use crate::policy::RangePolicy;

/// The parts of a histogram layer's style that change bar heights.
///
/// Taken from the first histogram layer of a layer list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarState {
    /// How bin widths are chosen.
    pub bin_sizer: BinSizer,
    /// Whether counts accumulate across bins.
    pub cumulative: bool,
    /// How counts are scaled.
    pub normalisation: Normalisation,
}

impl BarState {
    /// Returns the bar state of the first histogram layer, if any.
    #[must_use]
    pub fn from_layers(layers: &[Layer]) -> Option<Self> {
        layers
            .iter()
            .find_map(|layer| layer.style().histogram())
            .map(|style| Self {
                bin_sizer: style.bin_sizer,
                cumulative: style.cumulation.is_cumulative(),
                normalisation: style.normalisation,
            })
    }

    /// Returns `true` if going from `old` to `new` changes bar heights
    /// enough to need a new vertical range.
    ///
    /// A bin size change alone does not matter for cumulative plots, whose
    /// last bar holds the total whatever the binning.
    #[must_use]
    pub fn requires_rerange(old: Option<&Self>, new: Option<&Self>) -> bool {
        match (old, new) {
            (None, None) => false,
            (Some(_), None) | (None, Some(_)) => true,
            (Some(old), Some(new)) => {
                old.cumulative != new.cumulative
                    || old.normalisation != new.normalisation
                    || (old.bin_sizer != new.bin_sizer && !new.cumulative)
            }
        }
    }
}

/// Re-ranging policy for histogram plots.
///
/// Scales behave as on a plane plot; bar styling is checked as well.
#[derive(Copy, Clone, Debug, Default)]
pub struct HistogramPolicy {
    plane: PlanePolicy,
}

impl RangePolicy<PlaneProfile> for HistogramPolicy {
    fn log_changed(&self, old: &PlaneProfile, new: &PlaneProfile) -> bool {
        self.plane.log_changed(old, new)
    }

    fn style_invalidation(&self, old_layers: &[Layer], new_layers: &[Layer]) -> bool {
        BarState::requires_rerange(
            BarState::from_layers(old_layers).as_ref(),
            BarState::from_layers(new_layers).as_ref(),
        )
    }
}
