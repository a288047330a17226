// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes controllers: the zone-level surface a plot window talks to.

use alloc::sync::Arc;
use alloc::vec::Vec;

use rerange_axis::{
    AxisController, ConfigMap, Decision, PlaneAspect, PlanePolicy, PlaneProfile, RangePolicy,
    plane,
};
use rerange_layer::Layer;

use crate::ganger::{Ganger, MatrixGanger, SingleGanger};
use crate::host::{NullHost, ZoneHost};
use crate::multi_axis::MultiAxisController;
use crate::replicator::ZoneChanges;
use crate::zone::ZoneId;

/// Zone-level axis control shared by single-zone, disjoint and matrix
/// plots.
pub trait AxesController {
    /// Axis profile type of each zone.
    type Profile;
    /// Aspect type of each zone.
    type Aspect;
    /// Re-ranging policy of each zone.
    type Policy;

    /// Returns the current zones.
    fn zones(&self) -> &[ZoneId];

    /// Makes `zones` current, where the layout allows it.
    fn set_zones(&mut self, zones: &[ZoneId]) -> ZoneChanges;

    /// Returns the effective configuration of a known zone.
    fn zone_config(&self, zone: &ZoneId) -> Option<ConfigMap>;

    /// Returns the controller of a known zone.
    fn controller(
        &self,
        zone: &ZoneId,
    ) -> Option<&AxisController<Self::Profile, Self::Aspect, Self::Policy>>;

    /// Returns the controller of a known zone mutably.
    fn controller_mut(
        &mut self,
        zone: &ZoneId,
    ) -> Option<&mut AxisController<Self::Profile, Self::Aspect, Self::Policy>>;

    /// Clears the aspect, ranges and aspect overrides of every zone.
    fn reset_aspects(&mut self);

    /// Locks or unlocks the axes of every zone.
    fn set_axis_lock(&mut self, lock: bool);

    /// Configures one current zone with an explicit profile.
    ///
    /// Returns `None` if the zone is not current.
    fn configure_zone(
        &mut self,
        zone: &ZoneId,
        profile: Self::Profile,
        layers: &[Layer],
    ) -> Option<Decision>
    where
        Self::Policy: RangePolicy<Self::Profile>,
    {
        if !self.zones().contains(zone) {
            return None;
        }
        let controller = self.controller_mut(zone)?;
        Some(controller.configure_for_layers(profile, layers))
    }

    /// Configures one current zone with a profile built from its
    /// effective configuration.
    fn configure_zone_from_config(
        &mut self,
        zone: &ZoneId,
        layers: &[Layer],
        build: impl FnOnce(&ConfigMap) -> Self::Profile,
    ) -> Option<Decision>
    where
        Self::Policy: RangePolicy<Self::Profile>,
        Self: Sized,
    {
        let config = self.zone_config(zone)?;
        self.configure_zone(zone, build(&config), layers)
    }
}

/// A plot with exactly one zone.
#[derive(Debug)]
pub struct SingleAxesController<P, A, R> {
    zones: [ZoneId; 1],
    controller: AxisController<P, A, R>,
    config: ConfigMap,
}

impl<P, A, R> SingleAxesController<P, A, R> {
    /// Creates a controller for the zone [`SingleGanger::ZONE`].
    pub fn new(policy: R) -> Self {
        Self::with_zone(SingleGanger::ZONE, policy)
    }

    /// Creates a controller for a given zone id.
    pub fn with_zone(zone: ZoneId, policy: R) -> Self {
        Self {
            zones: [zone],
            controller: AxisController::new(policy),
            config: ConfigMap::new(),
        }
    }

    /// Returns the only zone.
    #[must_use]
    pub fn zone(&self) -> &ZoneId {
        &self.zones[0]
    }

    /// Returns the zone's controller.
    #[must_use]
    pub fn axis_controller(&self) -> &AxisController<P, A, R> {
        &self.controller
    }

    /// Returns the zone's configuration.
    #[must_use]
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Replaces the zone's configuration.
    pub fn set_config(&mut self, config: ConfigMap) {
        self.config = config;
    }
}

impl<P, A, R: Default> Default for SingleAxesController<P, A, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<P, A, R> AxesController for SingleAxesController<P, A, R> {
    type Profile = P;
    type Aspect = A;
    type Policy = R;

    fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    /// The zone set is fixed; this changes nothing.
    fn set_zones(&mut self, _zones: &[ZoneId]) -> ZoneChanges {
        ZoneChanges::default()
    }

    fn zone_config(&self, zone: &ZoneId) -> Option<ConfigMap> {
        (zone == self.zone()).then(|| self.config.clone())
    }

    fn controller(&self, zone: &ZoneId) -> Option<&AxisController<P, A, R>> {
        (zone == self.zone()).then_some(&self.controller)
    }

    fn controller_mut(&mut self, zone: &ZoneId) -> Option<&mut AxisController<P, A, R>> {
        if *zone == self.zones[0] {
            Some(&mut self.controller)
        } else {
            None
        }
    }

    fn reset_aspects(&mut self) {
        self.controller.clear_aspect();
    }

    fn set_axis_lock(&mut self, lock: bool) {
        self.controller.set_axis_lock(lock);
    }
}

/// Independent zones, each with its own controller and configuration,
/// following whatever zones the plot's ganger lays out.
#[derive(Debug)]
pub struct DisjointAxesController<P, A, R, H = NullHost> {
    axes: MultiAxisController<P, A, R, H>,
}

impl<P: 'static, A: 'static, R: Default + 'static> DisjointAxesController<P, A, R, NullHost> {
    /// Creates a controller whose zones use the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            axes: MultiAxisController::new(),
        }
    }
}

impl<P: 'static, A: 'static, R: Default + 'static> Default
    for DisjointAxesController<P, A, R, NullHost>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A, R, H> DisjointAxesController<P, A, R, H>
where
    P: 'static,
    A: Clone + 'static,
    R: 'static,
    H: ZoneHost<AxisController<P, A, R>>,
{
    /// Creates a controller building zone policies with `policy` and
    /// showing zone controls on `host`.
    pub fn with_host(policy: impl FnMut(&ZoneId) -> R + 'static, host: H) -> Self {
        Self {
            axes: MultiAxisController::with_host(policy, host),
        }
    }

    /// Makes the ganger's zones current.
    pub fn follow_ganger<G: Ganger<A> + ?Sized>(&mut self, ganger: &G) -> ZoneChanges {
        self.axes.set_zones(&ganger.zone_ids())
    }

    /// Sets the configuration shared by every zone.
    pub fn set_global_config(&mut self, config: ConfigMap) {
        self.axes.replicator_mut().configger_mut().set_global(config);
    }

    /// Sets the configuration made for one zone only.
    pub fn set_zone_overrides(&mut self, zone: ZoneId, config: ConfigMap) {
        self.axes
            .replicator_mut()
            .configger_mut()
            .set_zone_config(zone, config);
    }

    /// Returns the underlying multi-zone controller.
    #[must_use]
    pub fn multi(&self) -> &MultiAxisController<P, A, R, H> {
        &self.axes
    }

    /// Returns the underlying multi-zone controller mutably.
    pub fn multi_mut(&mut self) -> &mut MultiAxisController<P, A, R, H> {
        &mut self.axes
    }
}

impl<P, A, R, H> AxesController for DisjointAxesController<P, A, R, H>
where
    P: 'static,
    A: Clone + 'static,
    R: 'static,
    H: ZoneHost<AxisController<P, A, R>>,
{
    type Profile = P;
    type Aspect = A;
    type Policy = R;

    fn zones(&self) -> &[ZoneId] {
        self.axes.zones()
    }

    fn set_zones(&mut self, zones: &[ZoneId]) -> ZoneChanges {
        self.axes.set_zones(zones)
    }

    fn zone_config(&self, zone: &ZoneId) -> Option<ConfigMap> {
        let replicator = self.axes.replicator();
        replicator.controller(zone)?;
        Some(replicator.configger().zone_config(zone))
    }

    fn controller(&self, zone: &ZoneId) -> Option<&AxisController<P, A, R>> {
        self.axes.controller(zone)
    }

    fn controller_mut(&mut self, zone: &ZoneId) -> Option<&mut AxisController<P, A, R>> {
        self.axes.controller_mut(zone)
    }

    fn reset_aspects(&mut self) {
        self.axes.reset_aspects();
    }

    fn set_axis_lock(&mut self, lock: bool) {
        self.axes.set_axis_lock(lock);
    }
}

/// Axis settings of one coordinate of a scatter-plot matrix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordAxis {
    /// Logarithmic scale.
    pub log: bool,
    /// Reversed direction.
    pub flip: bool,
    /// Axis label.
    pub label: Option<Arc<str>>,
}

/// Scatter-plot matrix: one plane controller per cell.
///
/// Scale, direction and label are set per coordinate and apply to every
/// cell showing that coordinate. Diagonal cells plot a single coordinate
/// against a count, so they take only their horizontal settings from the
/// coordinate and never have a fixed aspect ratio.
///
/// ```
/// use rerange_axis::plane;
/// use rerange_zones::{AxesController, CoordAxis, MatrixAxesController, ZoneId};
///
/// let mut matrix = MatrixAxesController::new(0.0);
/// matrix.set_coord_count(3);
/// matrix.set_coord_axis(2, CoordAxis { log: true, ..CoordAxis::default() });
///
/// let cell = matrix.cell_config(&ZoneId::cell(0, 2)).unwrap();
/// assert!(!cell.get(&plane::XLOG));
/// assert!(cell.get(&plane::YLOG));
/// assert_eq!(matrix.zones().len(), 9);
/// ```
#[derive(Debug)]
pub struct MatrixAxesController<H = NullHost> {
    axes: MultiAxisController<PlaneProfile, PlaneAspect, PlanePolicy, H>,
    ganger: MatrixGanger,
    gap: f64,
    coords: Vec<CoordAxis>,
}

/// Controller type of one matrix cell.
pub type CellController = AxisController<PlaneProfile, PlaneAspect, PlanePolicy>;

impl MatrixAxesController<NullHost> {
    /// Creates an empty matrix with `gap` units between cells.
    #[must_use]
    pub fn new(gap: f64) -> Self {
        Self::with_host(NullHost, gap)
    }
}

impl<H: ZoneHost<CellController>> MatrixAxesController<H> {
    /// Smallest number of coordinates a sized matrix shows.
    pub const MIN_COORDS: u32 = 2;

    /// Creates an empty matrix showing cell controls on `host`.
    ///
    /// It has no cells until
    /// [`set_coord_count`](MatrixAxesController::set_coord_count) is called.
    pub fn with_host(host: H, gap: f64) -> Self {
        Self {
            axes: MultiAxisController::with_host(|_: &ZoneId| PlanePolicy, host),
            ganger: MatrixGanger::new(0, gap),
            gap,
            coords: Vec::new(),
        }
    }

    /// Resizes the matrix to `n` coordinates and makes its cells current.
    ///
    /// A matrix shows at least [`MIN_COORDS`](Self::MIN_COORDS) coordinates;
    /// smaller counts are raised to it. Settings of surviving coordinates
    /// are kept.
    pub fn set_coord_count(&mut self, n: u32) -> ZoneChanges {
        let n = n.max(Self::MIN_COORDS);
        self.coords.resize(n as usize, CoordAxis::default());
        self.ganger = MatrixGanger::new(n, self.gap);
        let cells = Ganger::<PlaneAspect>::zone_ids(&self.ganger);
        self.axes.set_zones(&cells)
    }

    /// Returns the layout.
    #[must_use]
    pub fn ganger(&self) -> &MatrixGanger {
        &self.ganger
    }

    /// Returns the settings of coordinate `i`.
    #[must_use]
    pub fn coord_axis(&self, i: usize) -> Option<&CoordAxis> {
        self.coords.get(i)
    }

    /// Replaces the settings of coordinate `i`; out-of-range indices are
    /// ignored.
    pub fn set_coord_axis(&mut self, i: usize, axis: CoordAxis) {
        if let Some(slot) = self.coords.get_mut(i) {
            *slot = axis;
        }
    }

    /// Sets the configuration shared by every cell.
    pub fn set_global_config(&mut self, config: ConfigMap) {
        self.axes.replicator_mut().configger_mut().set_global(config);
    }

    /// Returns the effective configuration of a cell: the global
    /// configuration plus the settings of the cell's coordinates.
    ///
    /// Returns `None` for zones that are not cells of the current matrix.
    #[must_use]
    pub fn cell_config(&self, zone: &ZoneId) -> Option<ConfigMap> {
        let (x, y) = zone.as_cell()?;
        let xaxis = self.coords.get(x as usize)?;
        let yaxis = self.coords.get(y as usize)?;
        let mut config = self.axes.replicator().configger().zone_config(zone);
        config.put(&plane::XLOG, xaxis.log);
        config.put(&plane::XFLIP, xaxis.flip);
        config.put(&plane::XLABEL, xaxis.label.clone());
        if zone.is_diagonal() {
            config.remove(plane::XYFACTOR.name());
        } else {
            config.put(&plane::YLOG, yaxis.log);
            config.put(&plane::YFLIP, yaxis.flip);
            config.put(&plane::YLABEL, yaxis.label.clone());
        }
        Some(config)
    }

    /// Configures one cell from its effective configuration.
    pub fn configure_cell(&mut self, zone: &ZoneId, layers: &[Layer]) -> Option<Decision> {
        let profile = PlaneProfile::from_config(&self.cell_config(zone)?);
        self.axes.configure_zone(zone, profile, layers)
    }

    /// Sets one cell's aspect, sharing its ranges with the cells showing
    /// the same coordinates.
    pub fn set_aspect(&mut self, zone: &ZoneId, aspect: Option<PlaneAspect>) {
        self.axes.set_aspect(&self.ganger, zone, aspect);
    }
}

impl<H: ZoneHost<CellController>> AxesController for MatrixAxesController<H> {
    type Profile = PlaneProfile;
    type Aspect = PlaneAspect;
    type Policy = PlanePolicy;

    fn zones(&self) -> &[ZoneId] {
        self.axes.zones()
    }

    /// Cells follow the coordinate count; use
    /// [`set_coord_count`](MatrixAxesController::set_coord_count) instead.
    fn set_zones(&mut self, _zones: &[ZoneId]) -> ZoneChanges {
        ZoneChanges::default()
    }

    fn zone_config(&self, zone: &ZoneId) -> Option<ConfigMap> {
        self.cell_config(zone)
    }

    fn controller(&self, zone: &ZoneId) -> Option<&CellController> {
        self.axes.controller(zone)
    }

    fn controller_mut(&mut self, zone: &ZoneId) -> Option<&mut CellController> {
        self.axes.controller_mut(zone)
    }

    fn reset_aspects(&mut self) {
        self.axes.reset_aspects();
    }

    fn set_axis_lock(&mut self, lock: bool) {
        self.axes.set_axis_lock(lock);
    }
}
