// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks for the surface that shows per-zone controls.

use crate::zone::ZoneId;

/// Receives a zone controller's controls as zones come and go.
///
/// In a desktop application this is the panel that shows one tab of axis
/// settings per zone. The replicator calls [`attach`](ZoneHost::attach) when
/// a zone becomes current and [`detach`](ZoneHost::detach) when it stops
/// being current; a detached controller is kept and may be attached again.
pub trait ZoneHost<C> {
    /// Shows the controls of `controller` for `zone`.
    fn attach(&mut self, zone: &ZoneId, controller: &C);

    /// Hides the controls of `controller` for `zone`.
    fn detach(&mut self, zone: &ZoneId, controller: &C);
}

/// A host that shows nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl<C> ZoneHost<C> for NullHost {
    fn attach(&mut self, _zone: &ZoneId, _controller: &C) {}

    fn detach(&mut self, _zone: &ZoneId, _controller: &C) {}
}
