// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `rerange_layer` identities + `rerange_axis` decisions.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rerange_axis::{HistogramPolicy, PlanePolicy, PlaneProfile, RangeDecision, Transition};
use rerange_layer::{
    BinSizer, CoordGroup, DataSpec, Geometry, HistoStyle, IdentityMode, Layer, LayerStyle,
    RowSubset, TableId, identity_set,
};

/// `n` scatter layers over `n / 4` tables, each with a different subset.
fn scatter_layers(n: u32) -> Vec<Layer> {
    (0..n)
        .map(|i| {
            Layer::new(
                Geometry::plane(),
                DataSpec::new(TableId::new(i / 4))
                    .with_coord("RA")
                    .with_coord("DEC")
                    .with_subset(RowSubset::Subset(i)),
            )
        })
        .collect()
}

fn histogram_layers(n: u32, bins: u32) -> Vec<Layer> {
    (0..n)
        .map(|i| {
            Layer::new(
                Geometry::plane(),
                DataSpec::new(TableId::new(i)).with_coord("VMAG"),
            )
            .with_coord_group(CoordGroup::extras_only(1).with_range_extra(0))
            .with_style(LayerStyle::Histogram(HistoStyle::with_bins(
                BinSizer::BinCount(bins),
            )))
        })
        .collect()
}

fn primed(layers: &[Layer]) -> RangeDecision {
    let mut decision = RangeDecision::new();
    decision.decide(
        &PlanePolicy,
        &Transition {
            old_profile: None,
            new_profile: &PlaneProfile::default(),
            old_layers: &[],
            new_layers: layers,
            lock: false,
        },
    );
    decision
}

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity/set");
    for n in [4_u32, 64, 1_024] {
        let layers = scatter_layers(n);
        for mode in [IdentityMode::Simple, IdentityMode::RangeCoords] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), n),
                &layers,
                |b, layers| b.iter(|| black_box(identity_set(layers, mode))),
            );
        }
    }
    group.finish();
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision/decide");
    let profile = PlaneProfile::default();
    let log = PlaneProfile::log(true, false);

    for n in [4_u32, 64, 1_024] {
        let layers = scatter_layers(n);

        // Steady state: same layers again, nothing to do.
        group.bench_with_input(BenchmarkId::new("unchanged", n), &layers, |b, layers| {
            b.iter_batched(
                || primed(layers),
                |mut d| {
                    black_box(d.decide(
                        &PlanePolicy,
                        &Transition {
                            old_profile: Some(&profile),
                            new_profile: &profile,
                            old_layers: layers,
                            new_layers: layers,
                            lock: false,
                        },
                    ))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("log_flip", n), &layers, |b, layers| {
            let d = primed(layers);
            b.iter(|| {
                black_box(d.evaluate(
                    &PlanePolicy,
                    &Transition {
                        old_profile: Some(&profile),
                        new_profile: &log,
                        old_layers: layers,
                        new_layers: layers,
                        lock: true,
                    },
                ))
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("decision/histogram");
    let old = histogram_layers(16, 10);
    let new = histogram_layers(16, 40);
    let policy = HistogramPolicy::default();
    group.bench_function("rebin", |b| {
        let d = primed(&old);
        b.iter(|| {
            black_box(d.evaluate(
                &policy,
                &Transition {
                    old_profile: Some(&profile),
                    new_profile: &profile,
                    old_layers: &old,
                    new_layers: &new,
                    lock: false,
                },
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_identity, bench_decide);
criterion_main!(benches);
