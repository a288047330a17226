// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer styles, as far as axis ranging cares about them.
//!
//! Colours, shapes and line widths never influence ranging and are not
//! modelled. Histogram styles are, because bar layout changes the vertical
//! extent of the plot.

/// Rule for choosing histogram bin widths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BinSizer {
    /// Every bin has this width in data units.
    FixedWidth(f64),
    /// The visible range is divided into approximately this many bins.
    BinCount(u32),
}

impl Default for BinSizer {
    fn default() -> Self {
        Self::BinCount(30)
    }
}

/// Whether and how histogram bars accumulate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cumulation {
    /// Each bar shows its own bin only.
    #[default]
    None,
    /// Each bar shows its bin plus every bin to its left.
    Forward,
    /// Each bar shows its bin plus every bin to its right.
    Reverse,
}

impl Cumulation {
    /// Returns `true` for either cumulative mode.
    #[must_use]
    pub const fn is_cumulative(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if accumulation runs right to left.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// Vertical normalisation applied to histogram bars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Normalisation {
    /// Raw counts or weighted sums.
    #[default]
    None,
    /// Total bar area is unity.
    Area,
    /// Bars are divided by the total count.
    Unit,
    /// The tallest bar has height unity.
    Maximum,
    /// Bar heights sum to unity.
    Height,
}

/// Bar layout options of a histogram layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct HistoStyle {
    /// Bin width rule.
    pub bin_sizer: BinSizer,
    /// Accumulation mode.
    pub cumulation: Cumulation,
    /// Vertical normalisation.
    pub normalisation: Normalisation,
}

impl HistoStyle {
    /// Creates a non-cumulative, unnormalised style with the given bin rule.
    #[must_use]
    pub fn with_bins(bin_sizer: BinSizer) -> Self {
        Self {
            bin_sizer,
            ..Self::default()
        }
    }

    /// Replaces the accumulation mode.
    #[must_use]
    pub fn cumulative(mut self, cumulation: Cumulation) -> Self {
        self.cumulation = cumulation;
        self
    }

    /// Replaces the normalisation.
    #[must_use]
    pub fn normalised(mut self, normalisation: Normalisation) -> Self {
        self.normalisation = normalisation;
        self
    }
}

/// Style of a plot layer.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum LayerStyle {
    /// Point markers.
    #[default]
    Marker,
    /// Histogram bars.
    Histogram(HistoStyle),
    /// Any other plotter whose style has no bearing on ranging.
    Other,
}

impl LayerStyle {
    /// Returns the histogram style, if this is a histogram layer.
    #[must_use]
    pub fn histogram(&self) -> Option<&HistoStyle> {
        match self {
            Self::Histogram(style) => Some(style),
            _ => None,
        }
    }
}
