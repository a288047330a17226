// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One controller per zone, kept in step with a changing zone set.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::configger::MultiConfigger;
use crate::host::{NullHost, ZoneHost};
use crate::zone::ZoneId;

/// What a call to [`ZoneReplicator::set_zones`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneChanges {
    /// Zones that became current, in the order given.
    pub added: Vec<ZoneId>,
    /// Zones that stopped being current, in their previous order.
    pub removed: Vec<ZoneId>,
    /// Added zones whose controller had to be constructed.
    pub created: Vec<ZoneId>,
}

impl ZoneChanges {
    /// Returns `true` if the zone set did not change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Owns one controller per zone and keeps the mapping consistent as the
/// set of current zones changes.
///
/// Controllers are built lazily by a factory the first time their zone
/// becomes current. They are kept when their zone goes away, so a zone
/// that comes back picks up its previous state (seen datasets, aspect,
/// lock).
///
/// ```
/// use rerange_zones::{ZoneId, ZoneReplicator};
///
/// let mut replicator = ZoneReplicator::new(|zone: &ZoneId| format!("controls for {zone}"));
/// let zones = [ZoneId::Index(0), ZoneId::Index(1)];
///
/// let changes = replicator.set_zones(&zones);
/// assert_eq!(changes.created.len(), 2);
/// assert!(replicator.set_zones(&zones).is_empty());
///
/// replicator.set_zones(&zones[..1]);
/// assert!(!replicator.is_current(&zones[1]));
/// assert_eq!(replicator.controller(&zones[1]).map(String::as_str), Some("controls for #1"));
/// assert_eq!(replicator.controller(&ZoneId::Index(9)), None);
/// ```
pub struct ZoneReplicator<C, H = NullHost> {
    factory: Box<dyn FnMut(&ZoneId) -> C>,
    controllers: HashMap<ZoneId, C>,
    current: Vec<ZoneId>,
    host: H,
    configger: MultiConfigger,
}

impl<C: fmt::Debug, H: fmt::Debug> fmt::Debug for ZoneReplicator<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneReplicator")
            .field("controllers", &self.controllers)
            .field("current", &self.current)
            .field("host", &self.host)
            .field("configger", &self.configger)
            .finish_non_exhaustive()
    }
}

impl<C> ZoneReplicator<C, NullHost> {
    /// Creates a replicator with no host.
    pub fn new(factory: impl FnMut(&ZoneId) -> C + 'static) -> Self {
        Self::with_host(factory, NullHost)
    }
}

impl<C, H: ZoneHost<C>> ZoneReplicator<C, H> {
    /// Creates a replicator that shows zone controls on `host`.
    pub fn with_host(factory: impl FnMut(&ZoneId) -> C + 'static, host: H) -> Self {
        Self {
            factory: Box::new(factory),
            controllers: HashMap::new(),
            current: Vec::new(),
            host,
            configger: MultiConfigger::new(),
        }
    }

    /// Makes `zones` the current zone set.
    ///
    /// Zones no longer present are detached from the host. New zones get a
    /// controller (built only if the zone was never seen before), are
    /// registered with the configger and attached to the host. Calling this
    /// again with the same zones changes nothing. Duplicate ids count once.
    pub fn set_zones(&mut self, zones: &[ZoneId]) -> ZoneChanges {
        let mut next: Vec<ZoneId> = Vec::with_capacity(zones.len());
        let mut next_set: HashSet<&ZoneId> = HashSet::with_capacity(zones.len());
        for zone in zones {
            if next_set.insert(zone) {
                next.push(zone.clone());
            }
        }
        let previous: HashSet<ZoneId> = self.current.iter().cloned().collect();

        let mut changes = ZoneChanges::default();
        for zone in &self.current {
            if !next_set.contains(zone) {
                if let Some(controller) = self.controllers.get(zone) {
                    trace!(%zone, "detaching zone controller");
                    self.host.detach(zone, controller);
                }
                changes.removed.push(zone.clone());
            }
        }
        for zone in &next {
            if previous.contains(zone) {
                continue;
            }
            let controller = match self.controllers.entry(zone.clone()) {
                hashbrown::hash_map::Entry::Occupied(entry) => entry.into_mut(),
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    trace!(%zone, "constructing zone controller");
                    changes.created.push(zone.clone());
                    self.configger.register_zone(zone.clone());
                    entry.insert((self.factory)(zone))
                }
            };
            trace!(%zone, "attaching zone controller");
            self.host.attach(zone, controller);
            changes.added.push(zone.clone());
        }

        self.current = next;
        changes
    }

    /// Returns the current zones, in the order last given.
    #[must_use]
    pub fn zones(&self) -> &[ZoneId] {
        &self.current
    }

    /// Returns `true` if `zone` is in the current zone set.
    #[must_use]
    pub fn is_current(&self, zone: &ZoneId) -> bool {
        self.current.contains(zone)
    }

    /// Returns the controller of a known zone, current or not.
    ///
    /// Zones never made current have no controller.
    #[must_use]
    pub fn controller(&self, zone: &ZoneId) -> Option<&C> {
        self.controllers.get(zone)
    }

    /// Returns the controller of a known zone mutably.
    pub fn controller_mut(&mut self, zone: &ZoneId) -> Option<&mut C> {
        self.controllers.get_mut(zone)
    }

    /// Iterates over the current zones and their controllers, in order.
    pub fn current_controllers(&self) -> impl Iterator<Item = (&ZoneId, &C)> + '_ {
        self.current
            .iter()
            .filter_map(|zone| self.controllers.get(zone).map(|c| (zone, c)))
    }

    /// Iterates over every known controller, current or not, in no
    /// particular order.
    pub fn known_controllers(&self) -> impl Iterator<Item = (&ZoneId, &C)> + '_ {
        self.controllers.iter()
    }

    /// Iterates mutably over every known controller.
    pub fn known_controllers_mut(&mut self) -> impl Iterator<Item = (&ZoneId, &mut C)> + '_ {
        self.controllers.iter_mut()
    }

    /// Returns the number of controllers built so far.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.controllers.len()
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configger.
    #[must_use]
    pub fn configger(&self) -> &MultiConfigger {
        &self.configger
    }

    /// Returns the configger mutably.
    pub fn configger_mut(&mut self) -> &mut MultiConfigger {
        &mut self.configger
    }
}
