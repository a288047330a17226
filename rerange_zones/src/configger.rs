// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global plus per-zone configuration.

use hashbrown::HashMap;
use rerange_axis::ConfigMap;

use crate::zone::ZoneId;

/// Aggregates the configuration shared by every zone with the settings
/// made for individual zones.
///
/// Maps go in and come out by value, so callers never alias the stored
/// state.
///
/// ```
/// use rerange_axis::{ConfigMap, plane};
/// use rerange_zones::{MultiConfigger, ZoneId};
///
/// let mut configger = MultiConfigger::new();
/// configger.set_global(ConfigMap::new().with(&plane::XLOG, true));
/// configger.set_zone_config(ZoneId::Index(1), ConfigMap::new().with(&plane::YFLIP, true));
///
/// let zone = configger.zone_config(&ZoneId::Index(1));
/// assert!(zone.get(&plane::XLOG) && zone.get(&plane::YFLIP));
/// assert!(!configger.zone_config(&ZoneId::Index(0)).get(&plane::YFLIP));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MultiConfigger {
    global: ConfigMap,
    zones: HashMap<ZoneId, ConfigMap>,
}

impl MultiConfigger {
    /// Creates a configger with empty global configuration and no zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration shared by every zone.
    #[must_use]
    pub fn global(&self) -> &ConfigMap {
        &self.global
    }

    /// Replaces the configuration shared by every zone.
    pub fn set_global(&mut self, config: ConfigMap) {
        self.global = config;
    }

    /// Registers a zone with no settings of its own, unless already known.
    ///
    /// Returns `true` if the zone was new.
    pub fn register_zone(&mut self, zone: ZoneId) -> bool {
        let mut added = false;
        self.zones.entry(zone).or_insert_with(|| {
            added = true;
            ConfigMap::new()
        });
        added
    }

    /// Returns `true` if the zone has been registered.
    #[must_use]
    pub fn is_registered(&self, zone: &ZoneId) -> bool {
        self.zones.contains_key(zone)
    }

    /// Replaces the settings made for one zone, registering it if needed.
    pub fn set_zone_config(&mut self, zone: ZoneId, config: ConfigMap) {
        self.zones.insert(zone, config);
    }

    /// Returns the settings made for one zone only.
    #[must_use]
    pub fn zone_overrides(&self, zone: &ZoneId) -> Option<&ConfigMap> {
        self.zones.get(zone)
    }

    /// Returns the effective configuration of a zone: the global map
    /// overlaid with the zone's own settings.
    ///
    /// Unregistered zones get the global configuration.
    #[must_use]
    pub fn zone_config(&self, zone: &ZoneId) -> ConfigMap {
        let mut config = self.global.clone();
        if let Some(own) = self.zones.get(zone) {
            config.overlay(own);
        }
        config
    }

    /// Returns the number of registered zones.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }
}
