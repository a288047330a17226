// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rerange Axis: when should an interactive plot recompute its axis ranges?
//!
//! Each time a plot's configuration changes (layers added or restyled,
//! scales switched, subsets toggled) the plot either keeps its current view
//! or discards it and auto-ranges from the data. Keeping the view is what
//! users expect most of the time; discarding it is needed when the old view
//! no longer makes sense.
//!
//! - [`RangeDecision`]: the stateful decision. It remembers the datasets
//!   plotted last time and applies the lock, scale-change, new-data and
//!   styling rules.
//! - [`RangePolicy`]: the plot-type hooks the decision consults. This crate
//!   ships [`PlanePolicy`], [`TimePolicy`], [`CubePolicy`], [`SkyPolicy`]
//!   and [`HistogramPolicy`], each next to its profile and aspect types in
//!   the [`plane`], [`time`], [`cube`], [`sky`] and [`histogram`] modules.
//! - [`AxisController`]: per-zone state (profile, layers, ranges, aspect,
//!   lock) driven by a decision.
//! - [`ConfigMap`]: typed settings from which profiles are built.
//!
//! ## Example
//!
//! ```rust
//! use rerange_axis::{HistogramAxisController, PlaneProfile};
//! use rerange_layer::{
//!     BinSizer, CoordGroup, DataSpec, Geometry, HistoStyle, Layer, LayerStyle, TableId,
//! };
//!
//! let histogram = |bins| {
//!     Layer::new(Geometry::plane(), DataSpec::new(TableId::new(0)).with_coord("VMAG"))
//!         .with_coord_group(CoordGroup::extras_only(1).with_range_extra(0))
//!         .with_style(LayerStyle::Histogram(HistoStyle::with_bins(BinSizer::BinCount(bins))))
//! };
//!
//! let mut axes = HistogramAxisController::default();
//! assert!(axes.configure_for_layers(PlaneProfile::default(), &[histogram(10)]).invalidates());
//!
//! // Same data, finer bins: bar heights change, so the y range must too.
//! assert!(axes.configure_for_layers(PlaneProfile::default(), &[histogram(40)]).invalidates());
//!
//! // Unless the axes are locked.
//! axes.set_axis_lock(true);
//! assert!(!axes.configure_for_layers(PlaneProfile::default(), &[histogram(80)]).invalidates());
//! ```
//!
//! ## Logging
//!
//! Decisions are reported through [`tracing`] at `debug` level, with the
//! seen-set bookkeeping at `trace`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std`
//! (default) or the `libm` feature for Kurbo's float math.

#![no_std]

extern crate alloc;

mod aspect;
mod config;
mod controller;
mod decision;
mod policy;
mod range;
mod scale;

pub mod cube;
pub mod histogram;
pub mod plane;
pub mod sky;
pub mod time;

pub use aspect::PlanarAspect;
pub use config::{ConfigError, ConfigKey, ConfigMap, ConfigType, ConfigValue};
pub use controller::{
    AxisController, CubeAxisController, HistogramAxisController, PlaneAxisController,
    SkyAxisController, TimeAxisController,
};
pub use cube::{CubeAspect, CubeMode, CubePolicy, CubeProfile};
pub use decision::{Decision, Evaluation, Invalidation, RangeDecision, Transition};
pub use histogram::{BarState, HistogramPolicy};
pub use plane::{PlaneAspect, PlanePolicy, PlaneProfile};
pub use policy::{FnPolicy, RangePolicy};
pub use range::{Range, Ranges};
pub use scale::{ScaleKind, scales_changed};
pub use sky::{Projection, SkyAspect, SkyPolicy, SkyProfile, SkySystem};
pub use time::{TimeAspect, TimePolicy, TimeProfile};
