// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D cube plots.
//!
//! A cube plot runs in one of two [`CubeMode`]s. In free mode each axis has
//! its own scale, direction and label, and the user may still ask for
//! isometric scaling; toggling that request forces new ranges, since
//! isometric axes share one unit length and need a common data cube. In
//! isotropic mode the axes are always linear, unflipped and labelled
//! X, Y and Z.

use alloc::sync::Arc;

use crate::config::{ConfigKey, ConfigMap};
use crate::policy::RangePolicy;
use crate::scale::{ScaleKind, scales_changed};

/// Per-axis scale keys, in x, y, z order.
pub const SCALES: [ConfigKey<ScaleKind>; 3] = [
    ConfigKey::new("xscale", ScaleKind::Linear),
    ConfigKey::new("yscale", ScaleKind::Linear),
    ConfigKey::new("zscale", ScaleKind::Linear),
];
/// Per-axis log shorthands; each overrides the matching [`SCALES`] key.
pub const LOGS: [ConfigKey<bool>; 3] = [
    ConfigKey::new("xlog", false),
    ConfigKey::new("ylog", false),
    ConfigKey::new("zlog", false),
];
/// Per-axis flip flags.
pub const FLIPS: [ConfigKey<bool>; 3] = [
    ConfigKey::new("xflip", false),
    ConfigKey::new("yflip", false),
    ConfigKey::new("zflip", false),
];
/// Per-axis labels.
pub const LABELS: [ConfigKey<Option<Arc<str>>>; 3] = [
    ConfigKey::new("xlabel", None),
    ConfigKey::new("ylabel", None),
    ConfigKey::new("zlabel", None),
];
/// Request equal unit lengths on all three axes in free mode.
///
/// Ignored when the axes mix scale kinds.
pub const FORCE_ISO: ConfigKey<bool> = ConfigKey::new("isometric", false);

/// How the three axes of a cube plot relate to each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CubeMode {
    /// Independently configured axes.
    #[default]
    Free,
    /// Linear, unflipped axes sharing one unit length.
    Isotropic,
}

/// User-chosen configuration of a cube plot's axes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CubeProfile {
    /// Scales, in x, y, z order.
    pub scales: [ScaleKind; 3],
    /// Flip flags, in x, y, z order.
    pub flips: [bool; 3],
    /// Axis labels, in x, y, z order.
    pub labels: [Option<Arc<str>>; 3],
    /// Whether isometric scaling was requested in free mode.
    pub force_iso: bool,
}

impl CubeProfile {
    /// Names of the keys [`CubeProfile::from_config`] reads in free mode.
    ///
    /// Isotropic mode reads none of them.
    pub const KEYS: &'static [&'static str] = &[
        "xscale",
        "yscale",
        "zscale",
        "xlog",
        "ylog",
        "zlog",
        "xflip",
        "yflip",
        "zflip",
        "xlabel",
        "ylabel",
        "zlabel",
        "isometric",
    ];

    /// The fixed profile of isotropic mode.
    #[must_use]
    pub fn isotropic() -> Self {
        Self {
            scales: [ScaleKind::Linear; 3],
            flips: [false; 3],
            labels: [Some("X".into()), Some("Y".into()), Some("Z".into())],
            force_iso: false,
        }
    }

    /// Builds a free-mode profile from configuration.
    #[must_use]
    pub fn from_config(config: &ConfigMap) -> Self {
        let scale = |i: usize| {
            if config.get(&LOGS[i]) {
                ScaleKind::Log
            } else {
                config.get(&SCALES[i])
            }
        };
        Self {
            scales: [scale(0), scale(1), scale(2)],
            flips: FLIPS.each_ref().map(|key| config.get(key)),
            labels: LABELS.each_ref().map(|key| config.get(key)),
            force_iso: config.get(&FORCE_ISO),
        }
    }

    /// Builds a profile for a plot in the given mode.
    #[must_use]
    pub fn from_config_in(mode: CubeMode, config: &ConfigMap) -> Self {
        match mode {
            CubeMode::Free => Self::from_config(config),
            CubeMode::Isotropic => Self::isotropic(),
        }
    }

    /// Returns `true` if isometric scaling can take effect.
    ///
    /// Isometric scaling is ignored when the axes mix scale kinds, since
    /// one unit length cannot be shared between linear and log axes.
    #[must_use]
    pub fn is_isometric_possible(&self) -> bool {
        let [x, y, z] = self.scales;
        x == y && y == z
    }
}

/// Visible region and orientation of a cube plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeAspect {
    limits: [(f64, f64); 3],
    rotation: [f64; 9],
    zoom: f64,
    offset: (f64, f64),
}

impl CubeAspect {
    /// Identity rotation matrix, row major.
    pub const UNROTATED: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    /// Creates an unrotated, unzoomed aspect showing the given data cube.
    #[must_use]
    pub fn new(limits: [(f64, f64); 3]) -> Self {
        Self {
            limits,
            rotation: Self::UNROTATED,
            zoom: 1.0,
            offset: (0.0, 0.0),
        }
    }

    /// Returns a copy with a different view rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: [f64; 9]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with a different zoom factor and screen offset.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64, offset: (f64, f64)) -> Self {
        self.zoom = zoom;
        self.offset = offset;
        self
    }

    /// Returns the data limits of each axis.
    #[must_use]
    pub fn limits(&self) -> [(f64, f64); 3] {
        self.limits
    }

    /// Returns the view rotation, row major.
    #[must_use]
    pub fn rotation(&self) -> [f64; 9] {
        self.rotation
    }

    /// Returns the zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the screen offset.
    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }
}

/// Re-ranging policy for cube plots.
#[derive(Copy, Clone, Debug, Default)]
pub struct CubePolicy;

impl RangePolicy<CubeProfile> for CubePolicy {
    fn log_changed(&self, old: &CubeProfile, new: &CubeProfile) -> bool {
        scales_changed(&old.scales, &new.scales)
    }

    /// Toggling isometric scaling forces a clear, unless a scale changed too
    /// (that already invalidates) or the new scales make isometric mode
    /// impossible.
    fn force_clear_range(&self, old: &CubeProfile, new: &CubeProfile) -> bool {
        old.force_iso != new.force_iso
            && !self.log_changed(old, new)
            && new.is_isometric_possible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(on: bool) -> CubeProfile {
        CubeProfile {
            force_iso: on,
            ..CubeProfile::default()
        }
    }

    #[test]
    fn iso_toggle_forces_clear() {
        let policy = CubePolicy;
        assert!(policy.force_clear_range(&iso(false), &iso(true)));
        assert!(policy.force_clear_range(&iso(true), &iso(false)));
        assert!(!policy.force_clear_range(&iso(true), &iso(true)));
    }

    #[test]
    fn iso_toggle_with_scale_change_is_a_log_change() {
        let policy = CubePolicy;
        let mut all_log = iso(true);
        all_log.scales = [ScaleKind::Log; 3];
        assert!(policy.log_changed(&iso(false), &all_log));
        assert!(!policy.force_clear_range(&iso(false), &all_log));
    }

    #[test]
    fn iso_toggle_ignored_for_mixed_scales() {
        let policy = CubePolicy;
        let mut mixed_off = iso(false);
        mixed_off.scales[2] = ScaleKind::Log;
        let mut mixed_on = mixed_off.clone();
        mixed_on.force_iso = true;
        assert!(!mixed_on.is_isometric_possible());
        assert!(!policy.force_clear_range(&mixed_off, &mixed_on));
        assert!(!policy.log_changed(&mixed_off, &mixed_on));
    }

    #[test]
    fn from_config_reads_every_axis() {
        let config = ConfigMap::new()
            .with(&LOGS[1], true)
            .with(&SCALES[2], ScaleKind::Asinh)
            .with(&FLIPS[0], true)
            .with(&LABELS[2], Some(Arc::from("depth")))
            .with(&FORCE_ISO, true);
        let profile = CubeProfile::from_config(&config);
        assert_eq!(
            profile.scales,
            [ScaleKind::Linear, ScaleKind::Log, ScaleKind::Asinh]
        );
        assert_eq!(profile.flips, [true, false, false]);
        assert_eq!(profile.labels[2].as_deref(), Some("depth"));
        assert!(profile.force_iso);
        assert!(!profile.is_isometric_possible());
    }

    #[test]
    fn isotropic_mode_pins_linear_unflipped_axes() {
        let config = ConfigMap::new()
            .with(&LOGS[0], true)
            .with(&SCALES[1], ScaleKind::Asinh)
            .with(&FLIPS[2], true)
            .with(&LABELS[0], Some(Arc::from("RA")))
            .with(&FORCE_ISO, true);
        let profile = CubeProfile::from_config_in(CubeMode::Isotropic, &config);
        assert_eq!(profile, CubeProfile::isotropic());
        assert_eq!(profile.scales, [ScaleKind::Linear; 3]);
        assert_eq!(profile.flips, [false; 3]);
        assert_eq!(profile.labels[0].as_deref(), Some("X"));
        assert!(!profile.force_iso);
        assert!(profile.is_isometric_possible());

        let free = CubeProfile::from_config_in(CubeMode::Free, &config);
        assert_eq!(free, CubeProfile::from_config(&config));
        assert_eq!(free.scales[0], ScaleKind::Log);
    }

    #[test]
    fn isotropic_profiles_never_rerange_each_other() {
        let policy = CubePolicy;
        let a = CubeProfile::from_config_in(CubeMode::Isotropic, &ConfigMap::new());
        let b = CubeProfile::from_config_in(
            CubeMode::Isotropic,
            &ConfigMap::new().with(&LOGS[2], true),
        );
        assert!(!policy.log_changed(&a, &b));
        assert!(!policy.force_clear_range(&a, &b));
    }

    #[test]
    fn aspect_defaults_to_identity_view() {
        let aspect = CubeAspect::new([(0.0, 1.0); 3]);
        assert_eq!(aspect.rotation(), CubeAspect::UNROTATED);
        assert_eq!(aspect.zoom(), 1.0);
        let zoomed = aspect.with_zoom(2.0, (0.1, -0.1));
        assert_eq!(zoomed.offset(), (0.1, -0.1));
        assert_eq!(zoomed.limits(), aspect.limits());
    }
}
