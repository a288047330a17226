// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis scale kinds.

use core::fmt;

/// How data values map to distance along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleKind {
    /// Linear mapping.
    #[default]
    Linear,
    /// Base-10 logarithmic mapping; only positive values can be shown.
    Log,
    /// Linear near the origin, logarithmic (or negative logarithmic) outside.
    Symlog,
    /// Inverse hyperbolic sine: quasi-linear near the origin, quasi-log beyond.
    Asinh,
    /// Linear in seconds, with calendar-aware tick rounding.
    Time,
}

impl ScaleKind {
    /// Every scale kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Linear, Self::Log, Self::Symlog, Self::Asinh, Self::Time];

    /// Returns the configuration name of this scale kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Symlog => "symlog",
            Self::Asinh => "asinh",
            Self::Time => "time",
        }
    }

    /// Looks up a scale kind by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns `true` if the scale can only display strictly positive values.
    #[must_use]
    pub const fn is_positive_definite(self) -> bool {
        matches!(self, Self::Log)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if any axis changed scale kind between two profiles.
///
/// Slices of different lengths always count as changed.
#[must_use]
pub fn scales_changed(old: &[ScaleKind], new: &[ScaleKind]) -> bool {
    old != new
}
