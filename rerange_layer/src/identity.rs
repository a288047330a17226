// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset identity: "is this the same plotted data as before?".

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::geom::{CoordGroup, Geometry};
use crate::layer::Layer;
use crate::spec::{CoordLabels, DataSpec};
use crate::table::TableId;

/// Set of dataset identities, as observed for one layer list.
pub type IdentitySet = HashSet<DatasetIdentity>;

/// Which coordinates contribute to a [`DatasetIdentity`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum IdentityMode {
    /// Table plus the labels of every positional coordinate.
    ///
    /// The geometry itself is not part of the key.
    Simple,
    /// Geometry, table, plus the labels of the coordinates the plotter's
    /// [`CoordGroup`] flags as range-relevant.
    ///
    /// Layers with no range-relevant coordinates have no identity.
    #[default]
    RangeCoords,
}

/// Value key identifying "the same plotted data" for re-ranging purposes.
///
/// Two layers that plot the same range-relevant expressions from the same
/// table have equal identities, whatever their style, colour or row subset.
/// Equality and hashing are structural.
///
/// ```
/// use rerange_layer::{DataSpec, DatasetIdentity, Geometry, IdentityMode, Layer, RowSubset, TableId};
///
/// let spec = DataSpec::new(TableId::new(0)).with_coord("RMAG").with_coord("BMAG");
/// let all = Layer::new(Geometry::plane(), spec.clone());
/// let bright = Layer::new(Geometry::plane(), spec.with_subset(RowSubset::Subset(1)));
///
/// assert_eq!(
///     DatasetIdentity::for_layer(&all, IdentityMode::RangeCoords),
///     DatasetIdentity::for_layer(&bright, IdentityMode::RangeCoords),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatasetIdentity {
    geometry: Option<Geometry>,
    table: TableId,
    labels: Vec<CoordLabels>,
}

impl DatasetIdentity {
    /// Identity from the table and every positional coordinate label.
    #[must_use]
    pub fn simple(geom: &Geometry, data: &DataSpec, group: &CoordGroup) -> Self {
        let indices = group.positional_indices(geom);
        Self::build(None, data, &indices)
    }

    /// Identity from the geometry, table and range-relevant coordinate labels.
    ///
    /// Returns `None` if the coordinate group has no range-relevant
    /// coordinates for this geometry.
    #[must_use]
    pub fn range_coords(geom: &Geometry, data: &DataSpec, group: &CoordGroup) -> Option<Self> {
        let indices = group.range_coord_indices(geom);
        if indices.is_empty() {
            return None;
        }
        Some(Self::build(Some(geom.clone()), data, &indices))
    }

    /// Identity of a layer, or `None` if the layer carries no ranging data.
    ///
    /// Layers without a geometry or without a data spec never have an
    /// identity.
    #[must_use]
    pub fn for_layer(layer: &Layer, mode: IdentityMode) -> Option<Self> {
        let geom = layer.geometry()?;
        let data = layer.data()?;
        match mode {
            IdentityMode::Simple => Some(Self::simple(geom, data, layer.coord_group())),
            IdentityMode::RangeCoords => Self::range_coords(geom, data, layer.coord_group()),
        }
    }

    /// Returns the source table.
    #[must_use]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Returns the geometry, for coordinate-group-aware identities.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Returns the coordinate labels making up this identity.
    #[must_use]
    pub fn labels(&self) -> &[CoordLabels] {
        &self.labels
    }

    fn build(geometry: Option<Geometry>, data: &DataSpec, indices: &[usize]) -> Self {
        let labels = indices
            .iter()
            .map(|ic| CoordLabels::from(data.coord_labels(*ic)))
            .collect();
        let id = Self {
            geometry,
            table: data.table(),
            labels,
        };
        id.debug_assert_consistent();
        id
    }

    /// Checks that equality is reflexive across a clone and that equal
    /// values hash equally.
    fn debug_assert_consistent(&self) {
        #[cfg(debug_assertions)]
        {
            use core::hash::BuildHasher;
            use hashbrown::DefaultHashBuilder;

            let copy = self.clone();
            debug_assert!(copy == *self, "dataset identity is not reflexive");
            let hasher = DefaultHashBuilder::default();
            debug_assert_eq!(
                hasher.hash_one(&copy),
                hasher.hash_one(self),
                "dataset identity hash disagrees with equality"
            );
        }
    }
}

/// Collects the identities of every ranging layer in `layers`.
#[must_use]
pub fn identity_set(layers: &[Layer], mode: IdentityMode) -> IdentitySet {
    layers
        .iter()
        .filter_map(|layer| DatasetIdentity::for_layer(layer, mode))
        .collect()
}
