// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis controllers replicated across the zones of a ganged plot.

use alloc::vec::Vec;

use rerange_axis::{AxisController, Decision, RangePolicy};
use rerange_layer::Layer;
use tracing::debug;

use crate::ganger::Ganger;
use crate::host::{NullHost, ZoneHost};
use crate::replicator::{ZoneChanges, ZoneReplicator};
use crate::zone::ZoneId;

/// Zone-keyed [`AxisController`]s, with aspects kept consistent across
/// zones by a [`Ganger`].
///
/// ```
/// use rerange_axis::{PlaneAspect, PlanarAspect, PlanePolicy, PlaneProfile};
/// use rerange_zones::{MultiAxisController, StackGanger, ZoneId};
///
/// let stack = StackGanger::new(2, 0.0);
/// let zones = [ZoneId::Index(0), ZoneId::Index(1)];
/// let mut axes = MultiAxisController::<PlaneProfile, PlaneAspect, PlanePolicy>::new();
/// axes.set_zones(&zones);
///
/// axes.set_aspect(&stack, &zones[1], Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
/// axes.set_aspect(&stack, &zones[0], Some(PlaneAspect::new(5.0, 9.0, 0.0, 4.0)));
///
/// // The stack shares its horizontal range.
/// let lower = axes.controller(&zones[1]).and_then(|c| c.aspect()).unwrap();
/// assert_eq!(lower.x_span(), (5.0, 9.0));
/// assert_eq!(lower.y_span(), (0.0, 1.0));
/// ```
#[derive(Debug)]
pub struct MultiAxisController<P, A, R, H = NullHost> {
    replicator: ZoneReplicator<AxisController<P, A, R>, H>,
    lock: bool,
}

impl<P: 'static, A: 'static, R: Default + 'static> MultiAxisController<P, A, R, NullHost> {
    /// Creates a controller whose zones use the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(|_: &ZoneId| R::default(), NullHost)
    }
}

impl<P: 'static, A: 'static, R: Default + 'static> Default
    for MultiAxisController<P, A, R, NullHost>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A, R, H> MultiAxisController<P, A, R, H>
where
    P: 'static,
    A: 'static,
    R: 'static,
    H: ZoneHost<AxisController<P, A, R>>,
{
    /// Creates a controller building each zone's policy with `policy`.
    pub fn with_host(mut policy: impl FnMut(&ZoneId) -> R + 'static, host: H) -> Self {
        Self {
            replicator: ZoneReplicator::with_host(
                move |zone: &ZoneId| AxisController::new(policy(zone)),
                host,
            ),
            lock: false,
        }
    }

    /// Makes `zones` current. Newly built zone controllers inherit the
    /// axis lock.
    pub fn set_zones(&mut self, zones: &[ZoneId]) -> ZoneChanges {
        let changes = self.replicator.set_zones(zones);
        for zone in &changes.created {
            if let Some(controller) = self.replicator.controller_mut(zone) {
                controller.set_axis_lock(self.lock);
            }
        }
        changes
    }

    /// Returns the current zones.
    #[must_use]
    pub fn zones(&self) -> &[ZoneId] {
        self.replicator.zones()
    }

    /// Returns the controller of a known zone.
    #[must_use]
    pub fn controller(&self, zone: &ZoneId) -> Option<&AxisController<P, A, R>> {
        self.replicator.controller(zone)
    }

    /// Returns the controller of a known zone mutably.
    pub fn controller_mut(&mut self, zone: &ZoneId) -> Option<&mut AxisController<P, A, R>> {
        self.replicator.controller_mut(zone)
    }

    /// Returns the underlying replicator.
    #[must_use]
    pub fn replicator(&self) -> &ZoneReplicator<AxisController<P, A, R>, H> {
        &self.replicator
    }

    /// Returns the underlying replicator mutably.
    pub fn replicator_mut(&mut self) -> &mut ZoneReplicator<AxisController<P, A, R>, H> {
        &mut self.replicator
    }

    /// Returns the axis lock applied to every zone.
    #[must_use]
    pub fn axis_lock(&self) -> bool {
        self.lock
    }

    /// Locks or unlocks the axes of every known zone.
    pub fn set_axis_lock(&mut self, lock: bool) {
        self.lock = lock;
        for (_, controller) in self.replicator.known_controllers_mut() {
            controller.set_axis_lock(lock);
        }
    }

    /// Clears the aspect, ranges and aspect overrides of every known zone.
    pub fn reset_aspects(&mut self) {
        debug!(zones = self.replicator.known_count(), "resetting aspects");
        for (_, controller) in self.replicator.known_controllers_mut() {
            controller.clear_aspect();
        }
    }

    /// Returns the aspect of each current zone, in zone order.
    #[must_use]
    pub fn aspects(&self) -> Vec<(ZoneId, Option<&A>)> {
        self.replicator
            .current_controllers()
            .map(|(zone, controller)| (zone.clone(), controller.aspect()))
            .collect()
    }
}

impl<P, A, R, H> MultiAxisController<P, A, R, H>
where
    P: 'static,
    A: Clone + 'static,
    R: RangePolicy<P> + 'static,
    H: ZoneHost<AxisController<P, A, R>>,
{
    /// Configures one current zone, returning its re-ranging decision.
    ///
    /// Returns `None` if the zone is not current.
    pub fn configure_zone(
        &mut self,
        zone: &ZoneId,
        profile: P,
        layers: &[Layer],
    ) -> Option<Decision> {
        if !self.replicator.is_current(zone) {
            return None;
        }
        let controller = self.replicator.controller_mut(zone)?;
        Some(controller.configure_for_layers(profile, layers))
    }

    /// Sets the aspect of one zone and lets `ganger` adjust its siblings.
    ///
    /// The current aspects of the ganger's zones are gathered in the
    /// ganger's order, the new aspect is substituted at `zone`'s index, and
    /// the adjusted array is written back. Zones that are not current, or
    /// unknown to the ganger, are ignored.
    pub fn set_aspect<G>(&mut self, ganger: &G, zone: &ZoneId, aspect: Option<A>)
    where
        G: Ganger<A> + ?Sized,
    {
        if !self.replicator.is_current(zone) {
            return;
        }
        let ids = ganger.zone_ids();
        let Some(index) = ids.iter().position(|z| z == zone) else {
            return;
        };
        let mut aspects: Vec<Option<A>> = ids
            .iter()
            .map(|z| {
                self.replicator
                    .controller(z)
                    .and_then(|c| c.aspect().cloned())
            })
            .collect();
        aspects[index] = aspect;

        let adjusted = ganger.adjust_aspects(aspects, index);
        debug_assert_eq!(
            adjusted.len(),
            ids.len(),
            "ganger returned the wrong number of aspects"
        );
        for (z, a) in ids.iter().zip(adjusted) {
            if let Some(controller) = self.replicator.controller_mut(z) {
                controller.set_aspect(a);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganger::{MatrixGanger, StackGanger};
    use rerange_axis::{PlanarAspect, PlaneAspect, PlanePolicy, PlaneProfile};
    use rerange_layer::{DataSpec, Geometry, TableId};

    type Axes = MultiAxisController<PlaneProfile, PlaneAspect, PlanePolicy>;

    fn zones(n: u32) -> Vec<ZoneId> {
        (0..n).map(ZoneId::Index).collect()
    }

    fn scatter() -> Layer {
        Layer::new(
            Geometry::plane(),
            DataSpec::new(TableId::new(0)).with_coord("x").with_coord("y"),
        )
    }

    #[test]
    fn lock_reaches_existing_and_future_zones() {
        let mut axes = Axes::new();
        axes.set_zones(&zones(1));
        axes.set_axis_lock(true);
        axes.set_zones(&zones(2));
        for zone in zones(2) {
            assert!(axes.controller(&zone).unwrap().axis_lock(), "{zone} not locked");
        }
    }

    #[test]
    fn configure_zone_ignores_stale_zones() {
        let mut axes = Axes::new();
        axes.set_zones(&zones(2));
        axes.set_zones(&zones(1));
        let stale = ZoneId::Index(1);
        assert_eq!(axes.configure_zone(&stale, PlaneProfile::default(), &[scatter()]), None);
        let live = axes.configure_zone(&ZoneId::Index(0), PlaneProfile::default(), &[scatter()]);
        assert!(live.is_some_and(|d| d.invalidates()));
    }

    #[test]
    fn reset_clears_every_known_zone() {
        let mut axes = Axes::new();
        axes.set_zones(&zones(2));
        for zone in zones(2) {
            axes.set_aspect(
                &StackGanger::new(2, 0.0),
                &zone,
                Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)),
            );
        }
        // Zone 1 goes stale but keeps its controller.
        axes.set_zones(&zones(1));
        axes.reset_aspects();
        for zone in zones(2) {
            assert_eq!(axes.controller(&zone).unwrap().aspect(), None);
        }
    }

    #[test]
    fn set_aspect_on_stale_zone_is_ignored() {
        let mut axes = Axes::new();
        axes.set_zones(&zones(2));
        axes.set_zones(&zones(1));
        let stack = StackGanger::new(2, 0.0);
        axes.set_aspect(&stack, &ZoneId::Index(1), Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
        assert_eq!(axes.controller(&ZoneId::Index(1)).unwrap().aspect(), None);
    }

    #[test]
    fn matrix_aspect_propagates_to_cells() {
        let matrix = MatrixGanger::new(2, 0.0);
        let cells = Ganger::<PlaneAspect>::zone_ids(&matrix);
        let mut axes = Axes::new();
        axes.set_zones(&cells);
        for cell in &cells {
            axes.controller_mut(cell)
                .unwrap()
                .set_aspect(Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
        }
        axes.set_aspect(
            &matrix,
            &ZoneId::cell(1, 0),
            Some(PlaneAspect::new(10.0, 20.0, 30.0, 40.0)),
        );
        let aspect = |x, y| *axes.controller(&ZoneId::cell(x, y)).unwrap().aspect().unwrap();
        assert_eq!(aspect(1, 1).x_span(), (10.0, 20.0));
        assert_eq!(aspect(0, 1).y_span(), (10.0, 20.0));
        assert_eq!(aspect(0, 0).x_span(), (30.0, 40.0));
        assert_eq!(aspect(0, 0).y_span(), (0.0, 1.0));
        let listed = axes.aspects();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[1].0, ZoneId::cell(1, 0));
    }
}
