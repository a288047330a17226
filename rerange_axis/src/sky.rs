// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sky plots: celestial positions drawn through a map projection.
//!
//! Sky axes have no scale to change. A new projection or viewing system
//! reshapes the whole visible region, so either forces new ranges; a
//! reflection only mirrors it.

use alloc::sync::Arc;
use core::fmt;

use crate::config::{ConfigKey, ConfigMap, ConfigType, ConfigValue};
use crate::policy::RangePolicy;

/// Map projection used to flatten the sky.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Projection {
    /// Orthographic hemisphere, rotatable.
    #[default]
    Sin,
    /// Hammer-Aitoff equal-area whole-sky map.
    Aitoff,
    /// Plate carrée: longitude and latitude as plain Cartesian axes.
    Car,
}

impl Projection {
    /// Every projection, in declaration order.
    pub const ALL: [Self; 3] = [Self::Sin, Self::Aitoff, Self::Car];

    /// Returns the configuration name of the projection.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Aitoff => "aitoff",
            Self::Car => "car",
        }
    }
}

/// Celestial coordinate system the sky is viewed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SkySystem {
    /// ICRS / J2000 equatorial.
    #[default]
    Equatorial,
    /// IAU 1958 galactic.
    Galactic,
    /// Ecliptic.
    Ecliptic,
    /// De Vaucouleurs supergalactic.
    Supergalactic,
}

impl SkySystem {
    /// Every system, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Equatorial,
        Self::Galactic,
        Self::Ecliptic,
        Self::Supergalactic,
    ];

    /// Returns the configuration name of the system.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equatorial => "equatorial",
            Self::Galactic => "galactic",
            Self::Ecliptic => "ecliptic",
            Self::Supergalactic => "supergalactic",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SkySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! named_config_type {
    ($ty:ty, $type_name:literal) => {
        impl ConfigType for $ty {
            const TYPE_NAME: &'static str = $type_name;

            fn from_value(value: &ConfigValue) -> Option<Self> {
                match value {
                    ConfigValue::Text(name) => {
                        <$ty>::ALL.into_iter().find(|v| v.name() == &**name)
                    }
                    _ => None,
                }
            }

            fn into_value(self) -> Option<ConfigValue> {
                Some(ConfigValue::Text(Arc::from(self.name())))
            }
        }
    };
}

named_config_type!(Projection, "projection");
named_config_type!(SkySystem, "sky system");

/// Map projection.
pub const PROJECTION: ConfigKey<Projection> = ConfigKey::new("projection", Projection::Sin);
/// Mirror the longitude direction.
pub const REFLECT: ConfigKey<bool> = ConfigKey::new("reflect", true);
/// Viewing system.
pub const VIEWSYS: ConfigKey<SkySystem> = ConfigKey::new("viewsys", SkySystem::Equatorial);
/// Draw a coordinate grid.
pub const GRID: ConfigKey<bool> = ConfigKey::new("grid", true);

/// User-chosen configuration of a sky plot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkyProfile {
    /// Map projection.
    pub projection: Projection,
    /// Longitude increases to the left.
    pub reflect: bool,
    /// Viewing system.
    pub view_system: SkySystem,
    /// Coordinate grid drawn.
    pub grid: bool,
}

impl Default for SkyProfile {
    fn default() -> Self {
        Self {
            projection: Projection::Sin,
            reflect: true,
            view_system: SkySystem::Equatorial,
            grid: true,
        }
    }
}

impl SkyProfile {
    /// Names of the keys [`SkyProfile::from_config`] reads.
    pub const KEYS: &'static [&'static str] = &["projection", "reflect", "viewsys", "grid"];

    /// Builds a profile from configuration.
    #[must_use]
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            projection: config.get(&PROJECTION),
            reflect: config.get(&REFLECT),
            view_system: config.get(&VIEWSYS),
            grid: config.get(&GRID),
        }
    }
}

/// Visible region of a sky plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkyAspect {
    rotation: [f64; 9],
    zoom: f64,
    offset: (f64, f64),
}

impl SkyAspect {
    /// Unrotated whole-sky view.
    pub const WHOLE_SKY: Self = Self {
        rotation: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        zoom: 1.0,
        offset: (0.0, 0.0),
    };

    /// Creates an aspect.
    #[must_use]
    pub fn new(rotation: [f64; 9], zoom: f64, offset: (f64, f64)) -> Self {
        Self {
            rotation,
            zoom,
            offset,
        }
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

/// Re-ranging policy for sky plots.
#[derive(Copy, Clone, Debug, Default)]
pub struct SkyPolicy;

impl RangePolicy<SkyProfile> for SkyPolicy {
    fn log_changed(&self, _old: &SkyProfile, _new: &SkyProfile) -> bool {
        false
    }

    fn force_clear_range(&self, old: &SkyProfile, new: &SkyProfile) -> bool {
        old.projection != new.projection || old.view_system != new.view_system
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_and_system_changes_force() {
        let policy = SkyPolicy;
        let base = SkyProfile::default();
        let aitoff = SkyProfile {
            projection: Projection::Aitoff,
            ..base.clone()
        };
        let galactic = SkyProfile {
            view_system: SkySystem::Galactic,
            ..base.clone()
        };
        assert!(policy.force_clear_range(&base, &aitoff));
        assert!(policy.force_clear_range(&base, &galactic));
        assert!(!policy.log_changed(&base, &aitoff));
    }

    #[test]
    fn reflect_and_grid_do_not_force() {
        let policy = SkyPolicy;
        let base = SkyProfile::default();
        let mirrored = SkyProfile {
            reflect: false,
            grid: false,
            ..base.clone()
        };
        assert!(!policy.force_clear_range(&base, &mirrored));
    }

    #[test]
    fn enumerations_read_from_text() {
        let mut config = ConfigMap::new();
        config.set("projection", ConfigValue::Text(Arc::from("car")));
        config.put(&VIEWSYS, SkySystem::Ecliptic);
        let profile = SkyProfile::from_config(&config);
        assert_eq!(profile.projection, Projection::Car);
        assert_eq!(profile.view_system, SkySystem::Ecliptic);
        assert!(profile.reflect);

        config.set("projection", ConfigValue::Text(Arc::from("mollweide")));
        assert!(config.try_get(&PROJECTION).is_err());
    }
}
