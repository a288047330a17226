// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time plots: a time axis against a value axis.
//!
//! Only the value axis can change scale, so only it can trigger a scale
//! invalidation.

use alloc::sync::Arc;

use crate::aspect::{PlanarAspect, resolve_axis};
use crate::config::{ConfigKey, ConfigMap};
use crate::policy::RangePolicy;
use crate::range::Ranges;
use crate::scale::{ScaleKind, scales_changed};

/// Value axis scale.
pub const YSCALE: ConfigKey<ScaleKind> = ConfigKey::new("yscale", ScaleKind::Linear);
/// Shorthand for a logarithmic value axis; overrides [`YSCALE`].
pub const YLOG: ConfigKey<bool> = ConfigKey::new("ylog", false);
/// Value axis runs top to bottom.
pub const YFLIP: ConfigKey<bool> = ConfigKey::new("yflip", false);
/// Time axis label.
pub const TLABEL: ConfigKey<Option<Arc<str>>> = ConfigKey::new("tlabel", None);
/// Value axis label.
pub const YLABEL: ConfigKey<Option<Arc<str>>> = ConfigKey::new("ylabel", None);

/// Explicit start of the time window, in seconds; NaN means "from the data".
pub const TMIN: ConfigKey<f64> = ConfigKey::new("tmin", f64::NAN);
/// Explicit end of the time window.
pub const TMAX: ConfigKey<f64> = ConfigKey::new("tmax", f64::NAN);
/// Explicit lower value bound.
pub const YMIN: ConfigKey<f64> = ConfigKey::new("ymin", f64::NAN);
/// Explicit upper value bound.
pub const YMAX: ConfigKey<f64> = ConfigKey::new("ymax", f64::NAN);

/// User-chosen configuration of a time plot's axes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TimeProfile {
    /// Value axis scale.
    pub yscale: ScaleKind,
    /// Value axis reversed.
    pub yflip: bool,
    /// Time axis label.
    pub tlabel: Option<Arc<str>>,
    /// Value axis label.
    pub ylabel: Option<Arc<str>>,
}

impl TimeProfile {
    /// Names of the keys [`TimeProfile::from_config`] reads.
    pub const KEYS: &'static [&'static str] = &["yscale", "ylog", "yflip", "tlabel", "ylabel"];

    /// Builds a profile from configuration.
    #[must_use]
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            yscale: if config.get(&YLOG) {
                ScaleKind::Log
            } else {
                config.get(&YSCALE)
            },
            yflip: config.get(&YFLIP),
            tlabel: config.get(&TLABEL),
            ylabel: config.get(&YLABEL),
        }
    }
}

/// Visible window of a time plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeAspect {
    tmin: f64,
    tmax: f64,
    ymin: f64,
    ymax: f64,
}

impl TimeAspect {
    /// Creates an aspect; each pair may be given in either order.
    #[must_use]
    pub fn new(tmin: f64, tmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            tmin: tmin.min(tmax),
            tmax: tmax.max(tmin),
            ymin: ymin.min(ymax),
            ymax: ymax.max(ymin),
        }
    }

    /// Resolves an aspect from explicit bounds in `config`, filling gaps
    /// from `ranges` (time first, then value).
    #[must_use]
    pub fn resolve(config: &ConfigMap, ranges: Option<&Ranges>) -> Option<Self> {
        let range = |i: usize| ranges.and_then(|r| r.get(i));
        let (tmin, tmax) = resolve_axis(config.get(&TMIN), config.get(&TMAX), range(0))?;
        let (ymin, ymax) = resolve_axis(config.get(&YMIN), config.get(&YMAX), range(1))?;
        Some(Self::new(tmin, tmax, ymin, ymax))
    }
}

impl PlanarAspect for TimeAspect {
    fn x_span(&self) -> (f64, f64) {
        (self.tmin, self.tmax)
    }

    fn y_span(&self) -> (f64, f64) {
        (self.ymin, self.ymax)
    }

    fn with_x_span(&self, lo: f64, hi: f64) -> Self {
        Self::new(lo, hi, self.ymin, self.ymax)
    }

    fn with_y_span(&self, lo: f64, hi: f64) -> Self {
        Self::new(self.tmin, self.tmax, lo, hi)
    }
}

/// Re-ranging policy for time plots.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimePolicy;

impl RangePolicy<TimeProfile> for TimePolicy {
    fn log_changed(&self, old: &TimeProfile, new: &TimeProfile) -> bool {
        scales_changed(&[old.yscale], &[new.yscale])
    }
}
