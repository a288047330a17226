// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data geometries and coordinate groups.

use alloc::sync::Arc;

use smallvec::SmallVec;

/// Small list of coordinate indices.
pub type CoordIndices = SmallVec<[usize; 4]>;

/// Describes how data coordinates map to a plot position.
///
/// A geometry knows how many data coordinates make up one position: two for
/// a plane (X, Y), two for a time plot (T, Y), three for a cube and one for
/// the sky (a single coordinate with longitude and latitude inputs).
///
/// Geometries compare by value, so the same geometry built twice is equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    name: Arc<str>,
    pos_coord_count: usize,
}

impl Geometry {
    /// Creates a geometry with a name and the number of coordinates
    /// needed to describe one position.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, pos_coord_count: usize) -> Self {
        Self {
            name: name.into(),
            pos_coord_count,
        }
    }

    /// Plane geometry: X and Y coordinates.
    #[must_use]
    pub fn plane() -> Self {
        Self::new("plane", 2)
    }

    /// Time geometry: T and Y coordinates.
    #[must_use]
    pub fn time() -> Self {
        Self::new("time", 2)
    }

    /// Cube geometry: X, Y and Z coordinates.
    #[must_use]
    pub fn cube() -> Self {
        Self::new("cube", 3)
    }

    /// Sky geometry: one coordinate with longitude/latitude inputs.
    #[must_use]
    pub fn sky() -> Self {
        Self::new("sky", 1)
    }

    /// Returns the geometry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of coordinates that make up one position.
    #[must_use]
    pub fn pos_coord_count(&self) -> usize {
        self.pos_coord_count
    }
}

/// Layout of the coordinates a plotter consumes.
///
/// Coordinates are laid out as `position_count` blocks of positional
/// coordinates (the size of each block set by the [`Geometry`]), followed by
/// `extra_count` extra coordinates such as size, weight or label.
/// Some extras feed axis ranging (an error bar extent, a histogram weight);
/// most do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CoordGroup {
    position_count: usize,
    extra_count: usize,
    range_extras: CoordIndices,
}

impl CoordGroup {
    /// Group with a single position and no extras.
    #[must_use]
    pub fn single() -> Self {
        Self::positions(1)
    }

    /// Group with two positions (for instance the ends of a vector) and no extras.
    #[must_use]
    pub fn pair() -> Self {
        Self::positions(2)
    }

    /// Group with `count` positions and no extras.
    #[must_use]
    pub fn positions(count: usize) -> Self {
        Self {
            position_count: count,
            extra_count: 0,
            range_extras: CoordIndices::new(),
        }
    }

    /// Group with no positions, only extras.
    ///
    /// This is what a histogram-like plotter uses: its single data
    /// coordinate is an extra flagged as range-relevant.
    #[must_use]
    pub fn extras_only(extra_count: usize) -> Self {
        Self {
            position_count: 0,
            extra_count,
            range_extras: CoordIndices::new(),
        }
    }

    /// Sets the number of extra coordinates following the positions.
    #[must_use]
    pub fn with_extras(mut self, extra_count: usize) -> Self {
        self.extra_count = extra_count;
        self.range_extras.retain(|ie| *ie < extra_count);
        self
    }

    /// Flags an extra coordinate (by index among the extras) as feeding axis ranging.
    ///
    /// Indices outside the extra count are ignored.
    #[must_use]
    pub fn with_range_extra(mut self, extra_index: usize) -> Self {
        if extra_index < self.extra_count && !self.range_extras.contains(&extra_index) {
            self.range_extras.push(extra_index);
            self.range_extras.sort_unstable();
        }
        self
    }

    /// Returns the number of positions per row.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.position_count
    }

    /// Returns the number of extra coordinates.
    #[must_use]
    pub fn extra_count(&self) -> usize {
        self.extra_count
    }

    /// Returns the indices, among the extras, that feed axis ranging.
    #[must_use]
    pub fn range_extras(&self) -> &[usize] {
        &self.range_extras
    }

    /// Returns the first coordinate index of the extras for a geometry.
    #[must_use]
    pub fn extras_start(&self, geom: &Geometry) -> usize {
        self.position_count * geom.pos_coord_count()
    }

    /// Returns the indices of every positional coordinate for a geometry.
    #[must_use]
    pub fn positional_indices(&self, geom: &Geometry) -> CoordIndices {
        (0..self.extras_start(geom)).collect()
    }

    /// Returns the coordinate indices whose values feed axis ranging.
    ///
    /// These are all positional coordinates followed by the range-relevant
    /// extras, in ascending order.
    #[must_use]
    pub fn range_coord_indices(&self, geom: &Geometry) -> CoordIndices {
        let start = self.extras_start(geom);
        let mut indices = self.positional_indices(geom);
        indices.extend(self.range_extras.iter().map(|ie| start + ie));
        indices
    }
}
