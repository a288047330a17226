// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian (plane) plots: two axes, each linear, log or another scale.

use alloc::sync::Arc;

use kurbo::Rect;

use crate::aspect::{PlanarAspect, resolve_axis};
use crate::config::{ConfigKey, ConfigMap};
use crate::policy::RangePolicy;
use crate::range::Ranges;
use crate::scale::{ScaleKind, scales_changed};

/// Horizontal axis scale.
pub const XSCALE: ConfigKey<ScaleKind> = ConfigKey::new("xscale", ScaleKind::Linear);
/// Vertical axis scale.
pub const YSCALE: ConfigKey<ScaleKind> = ConfigKey::new("yscale", ScaleKind::Linear);
/// Shorthand for a logarithmic horizontal axis; overrides [`XSCALE`].
pub const XLOG: ConfigKey<bool> = ConfigKey::new("xlog", false);
/// Shorthand for a logarithmic vertical axis; overrides [`YSCALE`].
pub const YLOG: ConfigKey<bool> = ConfigKey::new("ylog", false);
/// Horizontal axis runs right to left.
pub const XFLIP: ConfigKey<bool> = ConfigKey::new("xflip", false);
/// Vertical axis runs top to bottom.
pub const YFLIP: ConfigKey<bool> = ConfigKey::new("yflip", false);
/// Horizontal axis label.
pub const XLABEL: ConfigKey<Option<Arc<str>>> = ConfigKey::new("xlabel", None);
/// Vertical axis label.
pub const YLABEL: ConfigKey<Option<Arc<str>>> = ConfigKey::new("ylabel", None);
/// Fixed ratio of vertical to horizontal units; NaN leaves it free.
pub const XYFACTOR: ConfigKey<f64> = ConfigKey::new("aspect", f64::NAN);

/// Explicit lower horizontal bound; NaN means "from the data".
pub const XMIN: ConfigKey<f64> = ConfigKey::new("xmin", f64::NAN);
/// Explicit upper horizontal bound.
pub const XMAX: ConfigKey<f64> = ConfigKey::new("xmax", f64::NAN);
/// Explicit lower vertical bound.
pub const YMIN: ConfigKey<f64> = ConfigKey::new("ymin", f64::NAN);
/// Explicit upper vertical bound.
pub const YMAX: ConfigKey<f64> = ConfigKey::new("ymax", f64::NAN);

/// User-chosen configuration of a plane plot's axes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PlaneProfile {
    /// Horizontal scale.
    pub xscale: ScaleKind,
    /// Vertical scale.
    pub yscale: ScaleKind,
    /// Horizontal axis reversed.
    pub xflip: bool,
    /// Vertical axis reversed.
    pub yflip: bool,
    /// Horizontal label.
    pub xlabel: Option<Arc<str>>,
    /// Vertical label.
    pub ylabel: Option<Arc<str>>,
    /// Fixed unit aspect ratio, if any.
    pub xyfactor: Option<f64>,
}

impl PlaneProfile {
    /// Names of the keys [`PlaneProfile::from_config`] reads.
    pub const KEYS: &'static [&'static str] = &[
        "xscale", "yscale", "xlog", "ylog", "xflip", "yflip", "xlabel", "ylabel", "aspect",
    ];

    /// Linear axes with the given log flags.
    #[must_use]
    pub fn log(xlog: bool, ylog: bool) -> Self {
        let pick = |log| if log { ScaleKind::Log } else { ScaleKind::Linear };
        Self {
            xscale: pick(xlog),
            yscale: pick(ylog),
            ..Self::default()
        }
    }

    /// Builds a profile from configuration.
    ///
    /// A true log flag selects [`ScaleKind::Log`] regardless of the
    /// corresponding scale key.
    #[must_use]
    pub fn from_config(config: &ConfigMap) -> Self {
        let scale = |log_key: &ConfigKey<bool>, scale_key: &ConfigKey<ScaleKind>| {
            if config.get(log_key) {
                ScaleKind::Log
            } else {
                config.get(scale_key)
            }
        };
        let factor = config.get(&XYFACTOR);
        Self {
            xscale: scale(&XLOG, &XSCALE),
            yscale: scale(&YLOG, &YSCALE),
            xflip: config.get(&XFLIP),
            yflip: config.get(&YFLIP),
            xlabel: config.get(&XLABEL),
            ylabel: config.get(&YLABEL),
            xyfactor: (factor.is_finite() && factor > 0.0).then_some(factor),
        }
    }

    /// Returns the horizontal and vertical scales.
    #[must_use]
    pub fn scales(&self) -> [ScaleKind; 2] {
        [self.xscale, self.yscale]
    }
}

/// Visible data window of a plane plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneAspect {
    window: Rect,
}

impl PlaneAspect {
    /// Creates an aspect from data bounds.
    #[must_use]
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            window: Rect::new(xmin, ymin, xmax, ymax).abs(),
        }
    }

    /// Returns the data window.
    #[must_use]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Resolves an aspect from explicit bounds in `config`, filling gaps
    /// from `ranges` (horizontal first, then vertical).
    ///
    /// Returns `None` if some bound is neither configured nor known from
    /// the data.
    #[must_use]
    pub fn resolve(config: &ConfigMap, ranges: Option<&Ranges>) -> Option<Self> {
        let range = |i: usize| ranges.and_then(|r| r.get(i));
        let (xmin, xmax) = resolve_axis(config.get(&XMIN), config.get(&XMAX), range(0))?;
        let (ymin, ymax) = resolve_axis(config.get(&YMIN), config.get(&YMAX), range(1))?;
        Some(Self::new(xmin, xmax, ymin, ymax))
    }
}

impl PlanarAspect for PlaneAspect {
    fn x_span(&self) -> (f64, f64) {
        (self.window.x0, self.window.x1)
    }

    fn y_span(&self) -> (f64, f64) {
        (self.window.y0, self.window.y1)
    }

    fn with_x_span(&self, lo: f64, hi: f64) -> Self {
        Self::new(lo, hi, self.window.y0, self.window.y1)
    }

    fn with_y_span(&self, lo: f64, hi: f64) -> Self {
        Self::new(self.window.x0, self.window.x1, lo, hi)
    }
}

/// Re-ranging policy for plane plots: a scale change on either axis
/// invalidates.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlanePolicy;

impl RangePolicy<PlaneProfile> for PlanePolicy {
    fn log_changed(&self, old: &PlaneProfile, new: &PlaneProfile) -> bool {
        scales_changed(&old.scales(), &new.scales())
    }
}
