// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone replication and ganging through the public API.

use std::cell::Cell;
use std::rc::Rc;

use rerange_axis::{
    ConfigMap, PlanarAspect, PlaneAspect, PlanePolicy, PlaneProfile, ScaleKind, plane,
};
use rerange_layer::{DataSpec, Geometry, Layer, TableId};
use rerange_zones::{
    AxesController, CellController, CoordAxis, DisjointAxesController, MatrixAxesController,
    StackGanger, ZoneHost, ZoneId,
};

/// Counts how often controls are shown and hidden.
#[derive(Debug, Default)]
struct Panel {
    attached: usize,
    detached: usize,
}

impl ZoneHost<CellController> for Panel {
    fn attach(&mut self, _: &ZoneId, _: &CellController) {
        self.attached += 1;
    }

    fn detach(&mut self, _: &ZoneId, _: &CellController) {
        self.detached += 1;
    }
}

fn scatter(table: u32) -> Layer {
    Layer::new(
        Geometry::plane(),
        DataSpec::new(TableId::new(table)).with_coord("x").with_coord("y"),
    )
}

fn zones(n: u32) -> Vec<ZoneId> {
    (0..n).map(ZoneId::Index).collect()
}

#[test]
fn setting_the_same_zones_twice_does_nothing() {
    let built = Rc::new(Cell::new(0_u32));
    let counter = built.clone();
    let policy = move |_: &ZoneId| {
        counter.set(counter.get() + 1);
        PlanePolicy
    };
    let mut axes: DisjointAxesController<PlaneProfile, PlaneAspect, PlanePolicy, Panel> =
        DisjointAxesController::with_host(policy, Panel::default());

    let first = axes.set_zones(&zones(3));
    assert_eq!(first.created.len(), 3);
    assert_eq!(built.get(), 3);
    assert_eq!(axes.multi().replicator().host().attached, 3);

    let second = axes.set_zones(&zones(3));
    assert!(second.is_empty());
    assert_eq!(built.get(), 3);
    let host = axes.multi().replicator().host();
    assert_eq!((host.attached, host.detached), (3, 0));
}

#[test]
fn zones_that_go_and_return_keep_their_state() {
    let mut axes = DisjointAxesController::<PlaneProfile, PlaneAspect, PlanePolicy>::new();
    axes.set_zones(&zones(2));
    let second = ZoneId::Index(1);
    axes.configure_zone(&second, PlaneProfile::default(), &[scatter(0)]);

    axes.set_zones(&zones(1));
    assert!(!axes.zones().contains(&second));
    assert!(axes.controller(&second).is_some());
    assert_eq!(axes.configure_zone(&second, PlaneProfile::default(), &[scatter(0)]), None);

    axes.set_zones(&zones(2));
    let decision = axes
        .configure_zone(&second, PlaneProfile::default(), &[scatter(0)])
        .unwrap();
    assert!(!decision.invalidates(), "returning zone forgot its datasets");
    assert!(axes.controller(&ZoneId::Index(5)).is_none());
}

#[test]
fn stacked_zones_share_time_range_and_reset_together() {
    let stack = StackGanger::new(3, 0.0);
    let mut axes = DisjointAxesController::<PlaneProfile, PlaneAspect, PlanePolicy>::new();
    axes.follow_ganger(&stack);
    for (zone, y) in zones(3).iter().zip([0.0, 1.0, 2.0]) {
        axes.multi_mut()
            .set_aspect(&stack, zone, Some(PlaneAspect::new(0.0, 1.0, y, y + 1.0)));
    }
    axes.multi_mut().set_aspect(
        &stack,
        &ZoneId::Index(2),
        Some(PlaneAspect::new(-5.0, 5.0, 2.0, 3.0)),
    );
    for (zone, aspect) in axes.multi().aspects() {
        assert_eq!(aspect.map(PlanarAspect::x_span), Some((-5.0, 5.0)), "{zone}");
    }
    assert_eq!(
        axes.controller(&ZoneId::Index(0))
            .and_then(|c| c.aspect())
            .map(PlanarAspect::y_span),
        Some((0.0, 1.0))
    );

    axes.reset_aspects();
    assert!(axes.multi().aspects().iter().all(|(_, a)| a.is_none()));
}

#[test]
fn matrix_cells_follow_coordinate_settings() {
    let mut matrix = MatrixAxesController::with_host(Panel::default(), 2.0);
    matrix.set_global_config(ConfigMap::new().with(&plane::XYFACTOR, 1.0));
    let created = matrix.set_coord_count(3).created.len();
    assert_eq!(created, 9);
    matrix.set_coord_axis(
        1,
        CoordAxis {
            log: true,
            ..CoordAxis::default()
        },
    );

    let layers = [scatter(0)];
    for cell in matrix.zones().to_vec() {
        let decision = matrix.configure_cell(&cell, &layers).unwrap();
        assert!(decision.invalidates());
        let profile = matrix.controller(&cell).unwrap().profile().unwrap();
        let (x, y) = cell.as_cell().unwrap();
        assert_eq!(profile.xscale == ScaleKind::Log, x == 1, "{cell}");
        if cell.is_diagonal() {
            assert_eq!(profile.xyfactor, None, "{cell}");
        } else {
            assert_eq!(profile.yscale == ScaleKind::Log, y == 1, "{cell}");
            assert_eq!(profile.xyfactor, Some(1.0), "{cell}");
        }
    }

    let shrink = matrix.set_coord_count(1);
    assert_eq!(matrix.ganger().coord_count(), 2);
    assert_eq!(shrink.removed.len(), 5);
    assert_eq!(
        matrix.zones(),
        [ZoneId::cell(0, 0), ZoneId::cell(1, 0), ZoneId::cell(0, 1), ZoneId::cell(1, 1)]
    );
}

#[test]
fn locking_the_matrix_keeps_views_on_new_data() {
    let mut matrix = MatrixAxesController::new(0.0);
    matrix.set_coord_count(2);
    let cell = ZoneId::cell(1, 0);
    matrix.configure_cell(&cell, &[scatter(0)]);
    matrix.set_aspect(&cell, Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));

    matrix.set_axis_lock(true);
    let locked = matrix.configure_cell(&cell, &[scatter(0), scatter(1)]).unwrap();
    assert!(!locked.invalidates());
    assert!(locked.saw_new_data());
    assert!(matrix.controller(&cell).unwrap().aspect().is_some());
}
