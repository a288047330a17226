// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rerange Zones: axis control for plots made of several zones.
//!
//! A stacked time plot or a scatter-plot matrix draws several sets of axes
//! side by side. Each zone needs its own [`AxisController`] and its own
//! configuration, while the zones as a group must stay consistent: stacked
//! panels share their horizontal range, matrix cells share the range of the
//! coordinate they show.
//!
//! - [`ZoneId`]: how zones are named.
//! - [`Ganger`]: layout and consistency policy of a zone group, with
//!   [`SingleGanger`], [`StackGanger`] and [`MatrixGanger`].
//! - [`ZoneReplicator`]: one controller per zone, built lazily and kept as
//!   zones come and go, reported to a [`ZoneHost`].
//! - [`MultiConfigger`]: global plus per-zone configuration.
//! - [`MultiAxisController`]: replicated [`AxisController`]s with a shared
//!   lock and ganged aspects.
//! - [`AxesController`]: the zone-level surface, implemented by
//!   [`SingleAxesController`], [`DisjointAxesController`] and
//!   [`MatrixAxesController`].
//!
//! ## Example
//!
//! ```rust
//! use rerange_axis::{PlanarAspect, TimeAspect, TimePolicy, TimeProfile};
//! use rerange_layer::{DataSpec, Geometry, Layer, TableId};
//! use rerange_zones::{AxesController, DisjointAxesController, StackGanger, ZoneId};
//!
//! let stack = StackGanger::new(2, 4.0);
//! let mut axes = DisjointAxesController::<TimeProfile, TimeAspect, TimePolicy>::new();
//! axes.follow_ganger(&stack);
//!
//! let lightcurve = |table| {
//!     Layer::new(
//!         Geometry::time(),
//!         DataSpec::new(TableId::new(table)).with_coord("t").with_coord("flux"),
//!     )
//! };
//! let upper = ZoneId::Index(0);
//! let decision = axes.configure_zone(&upper, TimeProfile::default(), &[lightcurve(0)]);
//! assert!(decision.is_some_and(|d| d.invalidates()));
//!
//! // Ranging the lower panel moves the upper panel's time axis with it.
//! let lower = ZoneId::Index(1);
//! axes.multi_mut().set_aspect(&stack, &upper, Some(TimeAspect::new(0.0, 1.0, 0.0, 1.0)));
//! axes.multi_mut().set_aspect(&stack, &lower, Some(TimeAspect::new(50.0, 60.0, -1.0, 1.0)));
//! let shared = axes.controller(&upper).and_then(|c| c.aspect()).unwrap();
//! assert_eq!(shared.x_span(), (50.0, 60.0));
//! ```
//!
//! ## Logging
//!
//! Zone churn is reported through [`tracing`] at `trace` level and aspect
//! resets at `debug`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std`
//! (default) or the `libm` feature for Kurbo's float math.
//!
//! [`AxisController`]: rerange_axis::AxisController

#![no_std]

extern crate alloc;

mod axes;
mod configger;
mod ganger;
mod host;
mod multi_axis;
mod replicator;
mod zone;

pub use axes::{
    AxesController, CellController, CoordAxis, DisjointAxesController, MatrixAxesController,
    SingleAxesController,
};
pub use configger::MultiConfigger;
pub use ganger::{Ganger, MatrixGanger, SingleGanger, StackGanger};
pub use host::{NullHost, ZoneHost};
pub use multi_axis::MultiAxisController;
pub use replicator::{ZoneChanges, ZoneReplicator};
pub use zone::ZoneId;
