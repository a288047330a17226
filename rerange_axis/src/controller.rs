// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-zone axis state driven by the re-ranging decision.

use alloc::vec::Vec;

use rerange_layer::Layer;
use tracing::debug;

use crate::config::ConfigMap;
use crate::cube::{CubeAspect, CubePolicy, CubeProfile};
use crate::decision::{Decision, RangeDecision, Transition};
use crate::histogram::HistogramPolicy;
use crate::plane::{PlaneAspect, PlanePolicy, PlaneProfile};
use crate::policy::RangePolicy;
use crate::range::Ranges;
use crate::sky::{SkyAspect, SkyPolicy, SkyProfile};
use crate::time::{TimeAspect, TimePolicy, TimeProfile};

/// Axis state of one plot zone.
///
/// Holds the profile and layers last configured, the data ranges and
/// aspect currently in use, the user's explicit aspect overrides, and the
/// axis lock. Each call to [`configure_for_layers`] runs the zone's
/// [`RangeDecision`] and drops the ranges and aspect if it invalidates.
///
/// [`configure_for_layers`]: AxisController::configure_for_layers
///
/// ```
/// use rerange_axis::{PlaneAspect, PlaneAxisController, PlaneProfile};
/// use rerange_layer::{DataSpec, Geometry, Layer, TableId};
///
/// let layers = [Layer::new(
///     Geometry::plane(),
///     DataSpec::new(TableId::new(0)).with_coord("x").with_coord("y"),
/// )];
/// let mut axes = PlaneAxisController::default();
/// axes.configure_for_layers(PlaneProfile::default(), &layers);
/// axes.set_aspect(Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
///
/// // Same data, new log axis: the aspect no longer makes sense.
/// let decision = axes.configure_for_layers(PlaneProfile::log(true, false), &layers);
/// assert!(decision.invalidates());
/// assert_eq!(axes.aspect(), None);
/// ```
#[derive(Clone, Debug)]
pub struct AxisController<P, A, R> {
    policy: R,
    decision: RangeDecision,
    lock: bool,
    profile: Option<P>,
    layers: Vec<Layer>,
    ranges: Option<Ranges>,
    aspect: Option<A>,
    aspect_config: ConfigMap,
}

/// Axis controller for plane plots.
pub type PlaneAxisController = AxisController<PlaneProfile, PlaneAspect, PlanePolicy>;
/// Axis controller for histogram plots.
pub type HistogramAxisController = AxisController<PlaneProfile, PlaneAspect, HistogramPolicy>;
/// Axis controller for time plots.
pub type TimeAxisController = AxisController<TimeProfile, TimeAspect, TimePolicy>;
/// Axis controller for cube plots.
pub type CubeAxisController = AxisController<CubeProfile, CubeAspect, CubePolicy>;
/// Axis controller for sky plots.
pub type SkyAxisController = AxisController<SkyProfile, SkyAspect, SkyPolicy>;

impl<P, A, R: Default> Default for AxisController<P, A, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<P, A, R> AxisController<P, A, R> {
    /// Creates an unlocked controller with nothing configured.
    pub fn new(policy: R) -> Self {
        Self {
            policy,
            decision: RangeDecision::new(),
            lock: false,
            profile: None,
            layers: Vec::new(),
            ranges: None,
            aspect: None,
            aspect_config: ConfigMap::new(),
        }
    }

    /// Returns the re-ranging policy.
    #[must_use]
    pub fn policy(&self) -> &R {
        &self.policy
    }

    /// Returns the decision state (the seen datasets).
    #[must_use]
    pub fn range_decision(&self) -> &RangeDecision {
        &self.decision
    }

    /// Returns `true` if the axes are locked.
    #[must_use]
    pub fn axis_lock(&self) -> bool {
        self.lock
    }

    /// Locks or unlocks the axes.
    ///
    /// While locked, new datasets and style changes keep the current view;
    /// scale changes still reset it.
    pub fn set_axis_lock(&mut self, lock: bool) {
        self.lock = lock;
    }

    /// Returns the profile last configured.
    #[must_use]
    pub fn profile(&self) -> Option<&P> {
        self.profile.as_ref()
    }

    /// Returns the layers last configured.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the data ranges in use, if known.
    #[must_use]
    pub fn ranges(&self) -> Option<&Ranges> {
        self.ranges.as_ref()
    }

    /// Stores data ranges computed for the current layers.
    pub fn set_ranges(&mut self, ranges: Option<Ranges>) {
        self.ranges = ranges;
    }

    /// Returns the aspect in use, if any.
    #[must_use]
    pub fn aspect(&self) -> Option<&A> {
        self.aspect.as_ref()
    }

    /// Sets the aspect, typically after a pan or zoom.
    pub fn set_aspect(&mut self, aspect: Option<A>) {
        self.aspect = aspect;
    }

    /// Returns the user's explicit aspect overrides.
    #[must_use]
    pub fn aspect_config(&self) -> &ConfigMap {
        &self.aspect_config
    }

    /// Replaces the user's explicit aspect overrides.
    pub fn set_aspect_config(&mut self, config: ConfigMap) {
        self.aspect_config = config;
    }

    /// Drops the aspect, the ranges and the explicit aspect overrides, so
    /// the next plot is auto-ranged from the data.
    pub fn clear_aspect(&mut self) {
        self.aspect = None;
        self.ranges = None;
        self.aspect_config.clear();
    }
}

impl<P, A, R: RangePolicy<P>> AxisController<P, A, R> {
    /// Adopts a new profile and layer list, discarding the ranges and
    /// aspect if the re-ranging decision says so.
    pub fn configure_for_layers(&mut self, profile: P, layers: &[Layer]) -> Decision {
        let decision = self.decision.decide(
            &self.policy,
            &Transition {
                old_profile: self.profile.as_ref(),
                new_profile: &profile,
                old_layers: &self.layers,
                new_layers: layers,
                lock: self.lock,
            },
        );
        if decision.invalidates() {
            debug!(reasons = ?decision.reasons(), "clearing ranges and aspect");
            self.ranges = None;
            self.aspect = None;
        }
        self.profile = Some(profile);
        self.layers = layers.to_vec();
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;
    use rerange_layer::{DataSpec, Geometry, TableId};

    fn scatter(table: u32) -> Layer {
        Layer::new(
            Geometry::plane(),
            DataSpec::new(TableId::new(table))
                .with_coord("x")
                .with_coord("y"),
        )
    }

    fn settled(layers: &[Layer]) -> PlaneAxisController {
        let mut axes = PlaneAxisController::default();
        axes.configure_for_layers(PlaneProfile::default(), layers);
        axes.set_ranges(Some([Range::new(0.0, 1.0), Range::new(0.0, 2.0)].into_iter().collect()));
        axes.set_aspect(Some(PlaneAspect::new(0.0, 1.0, 0.0, 2.0)));
        axes
    }

    #[test]
    fn unchanged_configuration_keeps_view() {
        let layers = [scatter(0)];
        let mut axes = settled(&layers);
        assert!(!axes.configure_for_layers(PlaneProfile::default(), &layers).invalidates());
        assert!(axes.aspect().is_some());
        assert!(axes.ranges().is_some());
    }

    #[test]
    fn new_data_clears_view_unless_locked() {
        let mut axes = settled(&[scatter(0)]);
        axes.set_axis_lock(true);
        let locked = axes.configure_for_layers(PlaneProfile::default(), &[scatter(0), scatter(1)]);
        assert!(!locked.invalidates());
        assert!(axes.aspect().is_some());

        let mut axes = settled(&[scatter(0)]);
        axes.configure_for_layers(PlaneProfile::default(), &[scatter(0), scatter(1)]);
        assert_eq!(axes.aspect(), None);
        assert_eq!(axes.ranges(), None);
    }

    #[test]
    fn invalidation_keeps_aspect_overrides() {
        let mut axes = settled(&[scatter(0)]);
        axes.set_aspect_config(ConfigMap::new().with(&crate::plane::XMIN, 0.5));
        axes.configure_for_layers(PlaneProfile::log(false, true), &[scatter(0)]);
        assert_eq!(axes.aspect(), None);
        assert!(!axes.aspect_config().is_empty());

        axes.clear_aspect();
        assert!(axes.aspect_config().is_empty());
    }

    #[test]
    fn configuration_is_remembered() {
        let layers = [scatter(3)];
        let mut axes = PlaneAxisController::default();
        assert_eq!(axes.profile(), None);
        axes.configure_for_layers(PlaneProfile::log(true, true), &layers);
        assert_eq!(axes.profile(), Some(&PlaneProfile::log(true, true)));
        assert_eq!(axes.layers(), &layers);
        assert_eq!(axes.range_decision().seen().len(), 1);
    }
}
