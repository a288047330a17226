// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data specifications: which table, which rows, which expressions.

use alloc::sync::Arc;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::table::{RowSubset, TableId};

/// Identifying labels for the inputs of one coordinate.
///
/// Most coordinates have a single input (a column name or expression);
/// sky positions have two (longitude and latitude). A blank coordinate
/// has no labels.
pub type CoordLabels = SmallVec<[Arc<str>; 2]>;

/// What a layer plots: a source table, a row subset, and one identifying
/// label list per coordinate.
///
/// The labels are the user-visible text of each coordinate (typically a
/// column name or a JEL-style expression), which is what makes two layers
/// "plot the same thing".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataSpec {
    table: TableId,
    subset: RowSubset,
    coords: Vec<CoordLabels>,
}

impl DataSpec {
    /// Creates a data spec over all rows of a table, with no coordinates yet.
    #[must_use]
    pub fn new(table: TableId) -> Self {
        Self {
            table,
            subset: RowSubset::All,
            coords: Vec::new(),
        }
    }

    /// Appends a single-input coordinate.
    #[must_use]
    pub fn with_coord(mut self, label: impl Into<Arc<str>>) -> Self {
        let mut labels = CoordLabels::new();
        labels.push(label.into());
        self.coords.push(labels);
        self
    }

    /// Appends a coordinate with several inputs, such as a sky position.
    #[must_use]
    pub fn with_multi_coord<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.coords.push(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a blank coordinate.
    #[must_use]
    pub fn with_blank_coord(mut self) -> Self {
        self.coords.push(CoordLabels::new());
        self
    }

    /// Replaces the row subset.
    #[must_use]
    pub fn with_subset(mut self, subset: RowSubset) -> Self {
        self.subset = subset;
        self
    }

    /// Returns the source table.
    #[must_use]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Returns the row subset.
    #[must_use]
    pub fn subset(&self) -> RowSubset {
        self.subset
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn coord_count(&self) -> usize {
        self.coords.len()
    }

    /// Returns the labels of coordinate `index`, or an empty slice if the
    /// coordinate is blank or does not exist.
    #[must_use]
    pub fn coord_labels(&self, index: usize) -> &[Arc<str>] {
        self.coords.get(index).map_or(&[], |labels| labels.as_slice())
    }

    /// Returns `true` if coordinate `index` is blank or does not exist.
    #[must_use]
    pub fn is_coord_blank(&self, index: usize) -> bool {
        self.coord_labels(index).is_empty()
    }
}
