// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rerange Layer: plot layer model and dataset identity keys.
//!
//! An interactive plot recomputes its axis ranges from the data only when
//! something genuinely new appears; otherwise the view would jump every time
//! the user restyles a layer or picks a different row subset. Deciding
//! whether the plotted data is "new" needs a value key for "the same
//! dataset", and that is what this crate provides.
//!
//! - [`Layer`]: one plotted dataset plus style. It may lack a [`Geometry`] or
//!   a [`DataSpec`] (decorations, half-configured layers).
//! - [`DataSpec`]: source [`TableId`], [`RowSubset`] and one label list per
//!   coordinate.
//! - [`CoordGroup`]: how a plotter lays out its coordinates, and which of
//!   them feed axis ranging.
//! - [`DatasetIdentity`]: structural key built from the table and the
//!   range-relevant coordinate labels, never from the row subset or the style.
//!
//! ## Example
//!
//! ```rust
//! use rerange_layer::{
//!     identity_set, DataSpec, Geometry, IdentityMode, Layer, RowSubset, TableId,
//! };
//!
//! let spec = DataSpec::new(TableId::new(0)).with_coord("RA").with_coord("DEC");
//! let before = [Layer::new(Geometry::plane(), spec.clone())];
//! let after = [Layer::new(Geometry::plane(), spec.with_subset(RowSubset::Subset(2)))];
//!
//! // A subset change alone leaves the dataset identities untouched.
//! assert_eq!(
//!     identity_set(&before, IdentityMode::RangeCoords),
//!     identity_set(&after, IdentityMode::RangeCoords),
//! );
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geom;
mod identity;
mod layer;
mod spec;
mod style;
mod table;

pub use geom::{CoordGroup, CoordIndices, Geometry};
pub use identity::{DatasetIdentity, IdentityMode, IdentitySet, identity_set};
pub use layer::Layer;
pub use spec::{CoordLabels, DataSpec};
pub use style::{BinSizer, Cumulation, HistoStyle, LayerStyle, Normalisation};
pub use table::{RowSubset, TableId};
