// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source table references and row-subset masks.

use core::fmt;

/// Opaque reference to a loaded source table.
///
/// Two layers reading from the same table carry equal `TableId`s. The value
/// has no meaning beyond identity; the table registry that hands these out
/// lives in the embedding application.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u32);

impl TableId {
    /// Creates a table reference from a registry index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the registry index of this table.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableId(t{})", self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Row-subset mask applied to a table before plotting.
///
/// Changing the subset only changes which rows are drawn, never the value
/// domain of the coordinates, so it never takes part in dataset identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RowSubset {
    /// Every row of the table.
    #[default]
    All,
    /// A numbered subset defined on the table.
    Subset(u32),
}

impl RowSubset {
    /// Returns `true` if this mask selects every row.
    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}
