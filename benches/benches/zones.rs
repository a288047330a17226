// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `rerange_zones`: zone churn and ganged aspect updates.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rerange_axis::{PlaneAspect, PlanePolicy, PlaneProfile};
use rerange_zones::{CoordAxis, MatrixAxesController, MultiAxisController, StackGanger, ZoneId};

type Axes = MultiAxisController<PlaneProfile, PlaneAspect, PlanePolicy>;

fn zones(range: core::ops::Range<u32>) -> Vec<ZoneId> {
    range.map(ZoneId::Index).collect()
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones/set_zones");

    for n in [4_u32, 32, 256] {
        let all = zones(0..n);
        let half = zones(0..n / 2);

        group.bench_with_input(BenchmarkId::new("unchanged", n), &all, |b, all| {
            let mut axes = Axes::new();
            axes.set_zones(all);
            b.iter(|| black_box(axes.set_zones(all)));
        });

        // Zones come back, so controllers are reused after the first pass.
        group.bench_with_input(BenchmarkId::new("shrink_grow", n), &all, |b, all| {
            let mut axes = Axes::new();
            axes.set_zones(all);
            b.iter(|| {
                black_box(axes.set_zones(&half));
                black_box(axes.set_zones(all));
            });
        });

        group.bench_with_input(BenchmarkId::new("cold", n), &all, |b, all| {
            b.iter_batched(
                Axes::new,
                |mut axes| {
                    black_box(axes.set_zones(all));
                    axes
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_ganging(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones/set_aspect");

    for n in [4_u32, 32] {
        let stack = StackGanger::new(n, 0.0);
        let mut axes = Axes::new();
        axes.set_zones(&zones(0..n));
        for zone in zones(0..n) {
            axes.set_aspect(&stack, &zone, Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
        }
        let target = ZoneId::Index(n - 1);
        group.bench_function(BenchmarkId::new("stack", n), |b| {
            b.iter(|| {
                axes.set_aspect(&stack, &target, Some(PlaneAspect::new(0.0, 2.0, 0.0, 1.0)));
            });
        });
    }

    for n in [3_u32, 8] {
        let mut matrix = MatrixAxesController::new(0.0);
        matrix.set_coord_count(n);
        matrix.set_coord_axis(0, CoordAxis { log: true, ..CoordAxis::default() });
        for cell in matrix.zones().to_vec() {
            matrix.set_aspect(&cell, Some(PlaneAspect::new(0.0, 1.0, 0.0, 1.0)));
        }
        let target = ZoneId::cell(n - 1, 0);
        group.bench_function(BenchmarkId::new("matrix", n), |b| {
            b.iter(|| {
                matrix.set_aspect(&target, Some(PlaneAspect::new(1.0, 2.0, 3.0, 4.0)));
            });
        });
        group.bench_function(BenchmarkId::new("cell_config", n), |b| {
            b.iter(|| black_box(matrix.cell_config(&target)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_churn, bench_ganging);
criterion_main!(benches);
