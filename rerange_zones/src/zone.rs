// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone identifiers.

use alloc::sync::Arc;
use core::fmt;

/// Identifies one zone (panel) of a multi-zone plot.
///
/// Ids are plain values: equal ids name the same zone across plot
/// reconfigurations, which is what lets a zone keep its controller while
/// the zone set changes around it. The derived ordering is the display
/// order: indexed zones, then matrix cells row by row, then named zones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneId {
    /// Position in a stack or a sequence of panels.
    Index(u32),
    /// Cell of a matrix, by column (`x`) and row (`y`).
    Cell {
        /// Row.
        y: u32,
        /// Column.
        x: u32,
    },
    /// Zone named by the user, for example after a table.
    Named(Arc<str>),
}

impl ZoneId {
    /// Creates a matrix cell id.
    #[must_use]
    pub const fn cell(x: u32, y: u32) -> Self {
        Self::Cell { y, x }
    }

    /// Creates a named zone id.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the column and row of a matrix cell.
    #[must_use]
    pub fn as_cell(&self) -> Option<(u32, u32)> {
        match self {
            Self::Cell { y, x } => Some((*x, *y)),
            _ => None,
        }
    }

    /// Returns `true` for matrix cells on the diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Self::Cell { y, x } if x == y)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Cell { y, x } => write!(f, "({x},{y})"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
