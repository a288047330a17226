// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot layers.

use crate::geom::{CoordGroup, Geometry};
use crate::spec::DataSpec;
use crate::style::LayerStyle;

/// One plotted dataset-plus-style unit.
///
/// A layer may lack a geometry or a data spec: decorative layers (a function
/// curve, a text label) have neither, and a layer whose coordinates the user
/// has not finished entering may have a geometry but no data. Such layers
/// play no part in dataset identity.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Layer {
    geometry: Option<Geometry>,
    data: Option<DataSpec>,
    coord_group: CoordGroup,
    style: LayerStyle,
}

impl Layer {
    /// Creates a data layer with a single position per row and marker style.
    #[must_use]
    pub fn new(geometry: Geometry, data: DataSpec) -> Self {
        Self {
            geometry: Some(geometry),
            data: Some(data),
            coord_group: CoordGroup::single(),
            style: LayerStyle::Marker,
        }
    }

    /// Creates a layer with no geometry and no data.
    #[must_use]
    pub fn decoration(style: LayerStyle) -> Self {
        Self {
            geometry: None,
            data: None,
            coord_group: CoordGroup::default(),
            style,
        }
    }

    /// Replaces the coordinate group.
    #[must_use]
    pub fn with_coord_group(mut self, coord_group: CoordGroup) -> Self {
        self.coord_group = coord_group;
        self
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces or removes the data spec.
    #[must_use]
    pub fn with_data(mut self, data: Option<DataSpec>) -> Self {
        self.data = data;
        self
    }

    /// Replaces or removes the geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Option<Geometry>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Returns the geometry, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Returns the data spec, if any.
    #[must_use]
    pub fn data(&self) -> Option<&DataSpec> {
        self.data.as_ref()
    }

    /// Returns the coordinate group of the plotter.
    #[must_use]
    pub fn coord_group(&self) -> &CoordGroup {
        &self.coord_group
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &LayerStyle {
        &self.style
    }
}
