// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gangers: how the zones of a multi-zone plot are laid out and kept
//! consistent with each other.

use alloc::vec::Vec;

use kurbo::Rect;
use rerange_axis::PlanarAspect;

use crate::zone::ZoneId;

/// Layout and cross-zone consistency policy of a multi-zone plot.
///
/// Zones are addressed by their position in [`zone_ids`](Ganger::zone_ids);
/// the aspect and bounds arrays use the same order.
pub trait Ganger<A> {
    /// Returns the ids of the ganged zones, in display order.
    fn zone_ids(&self) -> Vec<ZoneId>;

    /// Returns the number of zones.
    fn zone_count(&self) -> usize {
        self.zone_ids().len()
    }

    /// Splits the plot's bounds into one rectangle per zone.
    fn zone_bounds(&self, plot_bounds: Rect) -> Vec<Rect>;

    /// Makes the aspects jointly consistent after the aspect at `index`
    /// changed.
    ///
    /// Returns an array of the same length. Entries that are `None` (zones
    /// not yet ranged) stay `None`.
    fn adjust_aspects(&self, aspects: Vec<Option<A>>, index: usize) -> Vec<Option<A>>;
}

/// A single zone filling the whole plot.
#[derive(Copy, Clone, Debug, Default)]
pub struct SingleGanger;

impl SingleGanger {
    /// The id of the only zone.
    pub const ZONE: ZoneId = ZoneId::Index(0);
}

impl<A> Ganger<A> for SingleGanger {
    fn zone_ids(&self) -> Vec<ZoneId> {
        alloc::vec![Self::ZONE]
    }

    fn zone_count(&self) -> usize {
        1
    }

    fn zone_bounds(&self, plot_bounds: Rect) -> Vec<Rect> {
        alloc::vec![plot_bounds]
    }

    fn adjust_aspects(&self, aspects: Vec<Option<A>>, _index: usize) -> Vec<Option<A>> {
        aspects
    }
}

/// Zones stacked vertically, sharing one horizontal data range.
///
/// ```
/// use kurbo::Rect;
/// use rerange_axis::{PlanarAspect, PlaneAspect};
/// use rerange_zones::{Ganger, StackGanger};
///
/// let stack = StackGanger::new(2, 0.0);
/// let bounds = Ganger::<PlaneAspect>::zone_bounds(&stack, Rect::new(0.0, 0.0, 100.0, 200.0));
/// assert_eq!(bounds[1], Rect::new(0.0, 100.0, 100.0, 200.0));
///
/// let aspects = vec![
///     Some(PlaneAspect::new(0.0, 5.0, 0.0, 1.0)),
///     Some(PlaneAspect::new(0.0, 1.0, -3.0, 3.0)),
/// ];
/// let adjusted = stack.adjust_aspects(aspects, 0);
/// let lower = adjusted[1].unwrap();
/// assert_eq!(lower.x_span(), (0.0, 5.0));
/// assert_eq!(lower.y_span(), (-3.0, 3.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackGanger {
    count: u32,
    gap: f64,
}

impl StackGanger {
    /// Creates a stack of `count` zones separated by `gap` units.
    #[must_use]
    pub fn new(count: u32, gap: f64) -> Self {
        Self { count, gap }
    }
}

impl<A: PlanarAspect> Ganger<A> for StackGanger {
    fn zone_ids(&self) -> Vec<ZoneId> {
        (0..self.count).map(ZoneId::Index).collect()
    }

    fn zone_count(&self) -> usize {
        self.count as usize
    }

    fn zone_bounds(&self, plot_bounds: Rect) -> Vec<Rect> {
        let heights = split(plot_bounds.height(), self.count, self.gap);
        (0..self.count)
            .map(|i| {
                let y0 = plot_bounds.y0 + f64::from(i) * (heights + self.gap);
                Rect::new(plot_bounds.x0, y0, plot_bounds.x1, y0 + heights)
            })
            .collect()
    }

    fn adjust_aspects(&self, mut aspects: Vec<Option<A>>, index: usize) -> Vec<Option<A>> {
        let Some((lo, hi)) = aspects.get(index).and_then(|a| a.as_ref()).map(A::x_span) else {
            return aspects;
        };
        for (i, slot) in aspects.iter_mut().enumerate() {
            if i != index
                && let Some(aspect) = slot
            {
                *aspect = aspect.with_x_span(lo, hi);
            }
        }
        aspects
    }
}

/// Square scatter-plot matrix of `n` coordinates.
///
/// Cell `(x, y)` plots coordinate `x` horizontally against coordinate `y`
/// vertically. Each coordinate's data range is shared by every cell that
/// shows it: along its column horizontally and along its row vertically.
/// Diagonal cells show a distribution of their coordinate, so their
/// vertical axis is independent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatrixGanger {
    n: u32,
    gap: f64,
}

impl MatrixGanger {
    /// Creates an `n` by `n` matrix with `gap` units between cells.
    #[must_use]
    pub fn new(n: u32, gap: f64) -> Self {
        Self { n, gap }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn coord_count(&self) -> u32 {
        self.n
    }

    fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.n).flat_map(move |y| (0..self.n).map(move |x| (x, y)))
    }
}

impl<A: PlanarAspect> Ganger<A> for MatrixGanger {
    fn zone_ids(&self) -> Vec<ZoneId> {
        self.cells().map(|(x, y)| ZoneId::cell(x, y)).collect()
    }

    fn zone_count(&self) -> usize {
        (self.n as usize) * (self.n as usize)
    }

    fn zone_bounds(&self, plot_bounds: Rect) -> Vec<Rect> {
        let w = split(plot_bounds.width(), self.n, self.gap);
        let h = split(plot_bounds.height(), self.n, self.gap);
        self.cells()
            .map(|(x, y)| {
                let x0 = plot_bounds.x0 + f64::from(x) * (w + self.gap);
                let y0 = plot_bounds.y0 + f64::from(y) * (h + self.gap);
                Rect::new(x0, y0, x0 + w, y0 + h)
            })
            .collect()
    }

    fn adjust_aspects(&self, mut aspects: Vec<Option<A>>, index: usize) -> Vec<Option<A>> {
        let n = self.n as usize;
        if n == 0 {
            return aspects;
        }
        let Some(changed) = aspects.get(index).and_then(Clone::clone) else {
            return aspects;
        };
        let (ix, iy) = (index % n, index / n);
        let xspan = changed.x_span();
        let yspan = (ix != iy).then(|| changed.y_span());

        for (j, slot) in aspects.iter_mut().enumerate() {
            let Some(aspect) = slot else { continue };
            if j == index {
                continue;
            }
            let (jx, jy) = (j % n, j / n);
            let mut shares = |coord: usize, (lo, hi): (f64, f64)| {
                if jx == coord {
                    *aspect = aspect.with_x_span(lo, hi);
                }
                if jy == coord && jx != jy {
                    *aspect = aspect.with_y_span(lo, hi);
                }
            };
            shares(ix, xspan);
            if let Some(yspan) = yspan {
                shares(iy, yspan);
            }
        }
        aspects
    }
}

/// Length of each of `count` equal parts of `total`, with `gap` between
/// neighbours.
fn split(total: f64, count: u32, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let gaps = gap * f64::from(count - 1);
    ((total - gaps) / f64::from(count)).max(0.0)
}
