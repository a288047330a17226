// Copyright 2025 the Rerange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful "should the axes be re-ranged?" decision.

use bitflags::bitflags;
use rerange_layer::{IdentitySet, Layer, identity_set};
use tracing::{debug, trace};

use crate::policy::RangePolicy;

bitflags! {
    /// Reasons a [`Decision`] discards the current ranges.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// An axis scale changed (for example linear to log). Beats the lock.
        const LOG_CHANGED = 1 << 0;
        /// The plot type forced a clear (projection, isometric toggle).
        /// Beats the lock.
        const FORCED = 1 << 1;
        /// A dataset not plotted last time appeared.
        const NEW_DATA = 1 << 2;
        /// Layer styling changed the extent of the plotted data.
        const STYLE = 1 << 3;
    }
}

impl Invalidation {
    /// Reasons that apply even when the axes are locked.
    pub const LOCK_OVERRIDING: Self = Self::LOG_CHANGED.union(Self::FORCED);
}

/// Outcome of one re-ranging decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Decision {
    reasons: Invalidation,
    locked: bool,
    saw_new_data: bool,
}

impl Decision {
    /// Returns `true` if the current ranges and aspect must be discarded.
    #[must_use]
    pub fn invalidates(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Returns why the ranges are discarded (empty if they are kept).
    #[must_use]
    pub fn reasons(&self) -> Invalidation {
        self.reasons
    }

    /// Returns `true` if the axis lock was on.
    #[must_use]
    pub fn was_locked(&self) -> bool {
        self.locked
    }

    /// Returns `true` if the new layers contained an unseen dataset,
    /// whether or not that led to invalidation.
    #[must_use]
    pub fn saw_new_data(&self) -> bool {
        self.saw_new_data
    }
}

/// Everything one decision looks at.
#[derive(Debug)]
pub struct Transition<'a, P> {
    /// Profile in force before this change, if any.
    pub old_profile: Option<&'a P>,
    /// Profile about to be used.
    pub new_profile: &'a P,
    /// Layers plotted before this change.
    pub old_layers: &'a [Layer],
    /// Layers about to be plotted.
    pub new_layers: &'a [Layer],
    /// Whether the user locked the axes.
    pub lock: bool,
}

/// A decision together with the seen-dataset set it would leave behind.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// The decision.
    pub decision: Decision,
    /// Identities of the new layers; replaces the seen set on commit.
    pub next_seen: IdentitySet,
}

/// Remembers which datasets have been plotted and decides, on each
/// configuration change, whether the axis ranges must be recomputed.
///
/// The rules, in order:
///
/// 1. A scale change or a plot-type forced clear invalidates, lock or not.
/// 2. Otherwise a locked axis is kept.
/// 3. Otherwise any dataset not in the seen set invalidates.
/// 4. Otherwise the plot type may invalidate on styling changes.
///
/// After every decision the seen set becomes the identities of the new
/// layers, so removed datasets are forgotten.
///
/// ```
/// use rerange_axis::{FnPolicy, RangeDecision, Transition};
/// use rerange_layer::{DataSpec, Geometry, Layer, TableId};
///
/// let policy = FnPolicy::new(|old: &bool, new: &bool| old != new);
/// let layers = [Layer::new(
///     Geometry::plane(),
///     DataSpec::new(TableId::new(0)).with_coord("x").with_coord("y"),
/// )];
/// let mut decision = RangeDecision::new();
/// let step = |d: &mut RangeDecision, old: &[Layer]| {
///     d.decide(&policy, &Transition {
///         old_profile: Some(&false),
///         new_profile: &false,
///         old_layers: old,
///         new_layers: &layers,
///         lock: false,
///     })
/// };
///
/// assert!(step(&mut decision, &[]).invalidates());
/// assert!(!step(&mut decision, &layers).invalidates());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RangeDecision {
    seen: IdentitySet,
}

impl RangeDecision {
    /// Creates a decision with nothing seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identities plotted at the last committed decision.
    #[must_use]
    pub fn seen(&self) -> &IdentitySet {
        &self.seen
    }

    /// Forgets every seen dataset, so the next decision with any data
    /// invalidates.
    pub fn forget(&mut self) {
        self.seen.clear();
    }

    /// Computes a decision without committing it.
    ///
    /// With no old profile the scale and force checks are skipped.
    #[must_use]
    pub fn evaluate<P, R>(&self, policy: &R, t: &Transition<'_, P>) -> Evaluation
    where
        R: RangePolicy<P> + ?Sized,
    {
        let next_seen = identity_set(t.new_layers, policy.identity_mode());
        let saw_new_data = !next_seen.is_subset(&self.seen);

        let mut reasons = Invalidation::empty();
        if let Some(old) = t.old_profile {
            reasons.set(
                Invalidation::LOG_CHANGED,
                policy.log_changed(old, t.new_profile),
            );
            reasons.set(
                Invalidation::FORCED,
                policy.force_clear_range(old, t.new_profile),
            );
        }
        if reasons.is_empty() && !t.lock {
            if saw_new_data {
                reasons |= Invalidation::NEW_DATA;
            } else if policy.style_invalidation(t.old_layers, t.new_layers) {
                reasons |= Invalidation::STYLE;
            }
        }

        Evaluation {
            decision: Decision {
                reasons,
                locked: t.lock,
                saw_new_data,
            },
            next_seen,
        }
    }

    /// Computes a decision and records the new layers as seen.
    pub fn decide<P, R>(&mut self, policy: &R, t: &Transition<'_, P>) -> Decision
    where
        R: RangePolicy<P> + ?Sized,
    {
        let Evaluation {
            decision,
            next_seen,
        } = self.evaluate(policy, t);
        trace!(
            before = self.seen.len(),
            after = next_seen.len(),
            "replacing seen datasets"
        );
        self.seen = next_seen;
        debug!(
            reasons = ?decision.reasons(),
            lock = decision.was_locked(),
            new_data = decision.saw_new_data(),
            seen = self.seen.len(),
            "range decision"
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FnPolicy;
    use alloc::vec::Vec;
    use rerange_layer::{DataSpec, Geometry, LayerStyle, TableId};

    fn scatter(table: u32) -> Layer {
        Layer::new(
            Geometry::plane(),
            DataSpec::new(TableId::new(table))
                .with_coord("x")
                .with_coord("y"),
        )
    }

    /// Profile `(log, forced)`; the policy flags whichever bit changed.
    type Profile = (bool, bool);

    struct TestPolicy {
        style: bool,
    }

    impl RangePolicy<Profile> for TestPolicy {
        fn log_changed(&self, old: &Profile, new: &Profile) -> bool {
            old.0 != new.0
        }

        fn force_clear_range(&self, old: &Profile, new: &Profile) -> bool {
            old.1 != new.1
        }

        fn style_invalidation(&self, _: &[Layer], _: &[Layer]) -> bool {
            self.style
        }
    }

    fn step(
        d: &mut RangeDecision,
        policy: &TestPolicy,
        old: Profile,
        new: Profile,
        layers: &[Layer],
        lock: bool,
    ) -> Decision {
        d.decide(
            policy,
            &Transition {
                old_profile: Some(&old),
                new_profile: &new,
                old_layers: &[],
                new_layers: layers,
                lock,
            },
        )
    }

    #[test]
    fn first_data_invalidates_then_settles() {
        let policy = TestPolicy { style: false };
        let mut d = RangeDecision::new();
        let layers = [scatter(0)];
        let first = step(&mut d, &policy, (false, false), (false, false), &layers, false);
        assert_eq!(first.reasons(), Invalidation::NEW_DATA);
        let second = step(&mut d, &policy, (false, false), (false, false), &layers, false);
        assert!(!second.invalidates());
        assert!(!second.saw_new_data());
    }

    #[test]
    fn removing_a_dataset_does_not_invalidate() {
        let policy = TestPolicy { style: false };
        let mut d = RangeDecision::new();
        let p = (false, false);
        step(&mut d, &policy, p, p, &[scatter(0), scatter(1)], false);
        assert!(!step(&mut d, &policy, p, p, &[scatter(0)], false).invalidates());
        // ...but it is forgotten, so bringing it back does.
        assert!(step(&mut d, &policy, p, p, &[scatter(0), scatter(1)], false).invalidates());
    }

    #[test]
    fn lock_suppresses_new_data_but_not_scale_or_force() {
        let policy = TestPolicy { style: true };
        let mut d = RangeDecision::new();
        let locked = step(&mut d, &policy, (false, false), (false, false), &[scatter(0)], true);
        assert!(!locked.invalidates());
        assert!(locked.saw_new_data());
        assert!(locked.was_locked());

        let log = step(&mut d, &policy, (false, false), (true, false), &[scatter(0)], true);
        assert_eq!(log.reasons(), Invalidation::LOG_CHANGED);

        let forced = step(&mut d, &policy, (true, false), (true, true), &[scatter(0)], true);
        assert_eq!(forced.reasons(), Invalidation::FORCED);
        assert!(Invalidation::LOCK_OVERRIDING.contains(forced.reasons()));
    }

    #[test]
    fn locked_decision_still_replaces_seen() {
        let policy = TestPolicy { style: false };
        let mut d = RangeDecision::new();
        let p = (false, false);
        step(&mut d, &policy, p, p, &[scatter(5)], true);
        assert!(!step(&mut d, &policy, p, p, &[scatter(5)], false).invalidates());
    }

    #[test]
    fn style_check_only_runs_when_nothing_else_fired() {
        let policy = TestPolicy { style: true };
        let mut d = RangeDecision::new();
        let p = (false, false);
        let first = step(&mut d, &policy, p, p, &[scatter(0)], false);
        assert_eq!(first.reasons(), Invalidation::NEW_DATA);
        let restyled = step(&mut d, &policy, p, p, &[scatter(0)], false);
        assert_eq!(restyled.reasons(), Invalidation::STYLE);
    }

    #[test]
    fn no_old_profile_skips_profile_checks() {
        let policy = TestPolicy { style: false };
        let d = RangeDecision::new();
        let eval = d.evaluate(
            &policy,
            &Transition {
                old_profile: None,
                new_profile: &(true, true),
                old_layers: &[],
                new_layers: &[],
                lock: true,
            },
        );
        assert!(!eval.decision.invalidates());
        assert!(eval.next_seen.is_empty());
    }

    #[test]
    fn evaluate_does_not_commit() {
        let policy = FnPolicy::new(|_: &(), _: &()| false);
        let d = RangeDecision::new();
        let layers = [scatter(0)];
        let t = Transition {
            old_profile: Some(&()),
            new_profile: &(),
            old_layers: &[],
            new_layers: &layers,
            lock: false,
        };
        assert!(d.evaluate(&policy, &t).decision.invalidates());
        assert!(d.seen().is_empty());
        assert!(d.evaluate(&policy, &t).decision.invalidates());
    }

    #[test]
    fn decorations_never_count_as_new_data() {
        let policy = FnPolicy::new(|_: &(), _: &()| false);
        let mut d = RangeDecision::new();
        let layers: Vec<_> = (0..3).map(|_| Layer::decoration(LayerStyle::Other)).collect();
        let t = Transition {
            old_profile: Some(&()),
            new_profile: &(),
            old_layers: &[],
            new_layers: &layers,
            lock: false,
        };
        assert!(!d.decide(&policy, &t).invalidates());
    }

    #[test]
    fn forget_makes_old_data_new_again() {
        let policy = FnPolicy::new(|_: &(), _: &()| false);
        let mut d = RangeDecision::new();
        let layers = [scatter(0)];
        let t = Transition {
            old_profile: Some(&()),
            new_profile: &(),
            old_layers: &layers,
            new_layers: &layers,
            lock: false,
        };
        d.decide(&policy, &t);
        assert!(!d.decide(&policy, &t).invalidates());
        d.forget();
        assert!(d.decide(&policy, &t).invalidates());
    }
}
