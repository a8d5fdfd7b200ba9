// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition descriptors and orchestration parameters.

use crate::easing::Ease;

/// How a parent's own transition is ordered against its children.
///
/// The two orderings are mutually exclusive by construction: a transition
/// either runs before its children or after them (or, when no mode is set,
/// together with them). There is deliberately no way to request both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequenceMode {
    /// The parent finishes its own transition before any child starts.
    BeforeChildren,
    /// All children finish before the parent's own transition starts.
    AfterChildren,
}

/// The order in which staggered children receive their offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum StaggerDirection {
    /// First child first.
    #[default]
    Forward,
    /// Last child first.
    Reverse,
}

/// A description of how a state change plays out over time.
///
/// All time-based fields are in fractional **seconds**; see the crate docs.
///
/// Transitions are immutable after creation. Use [`TransitionBuilder`] to
/// construct one, or [`Transition::default`] for the stock tween (0.3s,
/// ease-in-out, no delay, children together with the parent).
///
/// # Example
///
/// ```rust
/// use cue_transition::{StaggerDirection, Transition, TransitionBuilder};
///
/// let t = TransitionBuilder::new()
///     .duration(2.0) // two seconds, never two thousand milliseconds
///     .delay_children(0.2)
///     .stagger_children(0.1)
///     .stagger_direction(StaggerDirection::Reverse)
///     .build();
///
/// assert_eq!(t.duration(), Some(2.0));
/// assert_eq!(t.stagger_children(), 0.1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    duration: Option<f64>,
    delay: f64,
    ease: Ease,
    when: Option<SequenceMode>,
    delay_children: f64,
    stagger_children: f64,
    stagger_direction: StaggerDirection,
}

impl Transition {
    /// Duration used when none is set explicitly, in seconds.
    pub const DEFAULT_DURATION: f64 = 0.3;

    /// Returns the explicit duration in seconds, if one was set.
    #[must_use]
    #[inline]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Returns the duration in seconds, falling back to
    /// [`Self::DEFAULT_DURATION`].
    #[must_use]
    #[inline]
    pub fn duration_or_default(&self) -> f64 {
        self.duration.unwrap_or(Self::DEFAULT_DURATION)
    }

    /// Returns the delay before the transition starts, in seconds.
    #[must_use]
    #[inline]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Returns the easing descriptor.
    #[must_use]
    #[inline]
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Returns the sequencing mode, if any.
    ///
    /// `None` means the parent and its children start together.
    #[must_use]
    #[inline]
    pub fn when(&self) -> Option<SequenceMode> {
        self.when
    }

    /// Returns the delay applied to all children, in seconds.
    #[must_use]
    #[inline]
    pub fn delay_children(&self) -> f64 {
        self.delay_children
    }

    /// Returns the per-child stagger interval, in seconds.
    #[must_use]
    #[inline]
    pub fn stagger_children(&self) -> f64 {
        self.stagger_children
    }

    /// Returns the direction staggered offsets are handed out in.
    #[must_use]
    #[inline]
    pub fn stagger_direction(&self) -> StaggerDirection {
        self.stagger_direction
    }
}

impl Default for Transition {
    fn default() -> Self {
        TransitionBuilder::new().build()
    }
}

/// Builder for [`Transition`].
///
/// # Example
///
/// ```rust
/// use cue_transition::{Ease, SequenceMode, TransitionBuilder};
///
/// let t = TransitionBuilder::new()
///     .duration(0.4)
///     .delay(0.05)
///     .ease(Ease::EaseOut)
///     .when(SequenceMode::AfterChildren)
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    duration: Option<f64>,
    delay: f64,
    ease: Ease,
    when: Option<SequenceMode>,
    delay_children: f64,
    stagger_children: f64,
    stagger_direction: StaggerDirection,
}

impl TransitionBuilder {
    /// Creates a new builder with stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duration, in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the delay before the transition starts, in seconds.
    #[must_use]
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Sets the easing descriptor.
    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Sets the sequencing mode.
    ///
    /// Setting a mode replaces any previously set mode; the two orderings
    /// cannot be combined.
    #[must_use]
    pub fn when(mut self, mode: SequenceMode) -> Self {
        self.when = Some(mode);
        self
    }

    /// Sets the delay applied to all children, in seconds.
    #[must_use]
    pub fn delay_children(mut self, seconds: f64) -> Self {
        self.delay_children = seconds;
        self
    }

    /// Sets the per-child stagger interval, in seconds.
    #[must_use]
    pub fn stagger_children(mut self, seconds: f64) -> Self {
        self.stagger_children = seconds;
        self
    }

    /// Sets the direction staggered offsets are handed out in.
    #[must_use]
    pub fn stagger_direction(mut self, direction: StaggerDirection) -> Self {
        self.stagger_direction = direction;
        self
    }

    /// Builds the [`Transition`].
    #[must_use]
    pub fn build(self) -> Transition {
        Transition {
            duration: self.duration,
            delay: self.delay,
            ease: self.ease,
            when: self.when,
            delay_children: self.delay_children,
            stagger_children: self.stagger_children,
            stagger_direction: self.stagger_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transition() {
        let t = Transition::default();
        assert_eq!(t.duration(), None);
        assert_eq!(t.duration_or_default(), Transition::DEFAULT_DURATION);
        assert_eq!(t.delay(), 0.0);
        assert_eq!(t.ease(), Ease::EaseInOut);
        assert_eq!(t.when(), None);
        assert_eq!(t.delay_children(), 0.0);
        assert_eq!(t.stagger_children(), 0.0);
        assert_eq!(t.stagger_direction(), StaggerDirection::Forward);
    }

    #[test]
    fn builder_sets_fields() {
        let t = TransitionBuilder::new()
            .duration(0.5)
            .delay(0.1)
            .ease(Ease::Linear)
            .when(SequenceMode::BeforeChildren)
            .delay_children(0.2)
            .stagger_children(0.05)
            .stagger_direction(StaggerDirection::Reverse)
            .build();

        assert_eq!(t.duration(), Some(0.5));
        assert_eq!(t.delay(), 0.1);
        assert_eq!(t.ease(), Ease::Linear);
        assert_eq!(t.when(), Some(SequenceMode::BeforeChildren));
        assert_eq!(t.delay_children(), 0.2);
        assert_eq!(t.stagger_children(), 0.05);
        assert_eq!(t.stagger_direction(), StaggerDirection::Reverse);
    }

    #[test]
    fn durations_are_seconds() {
        // `2` means two seconds. A millisecond reading would make this 2000x off.
        let t = TransitionBuilder::new().duration(2.0).build();
        assert_eq!(t.duration_or_default(), 2.0);
    }

    #[test]
    fn sequence_modes_are_exclusive() {
        // The mode is a single enum slot: setting one replaces the other,
        // and there is no representation for "both".
        let t = TransitionBuilder::new()
            .when(SequenceMode::BeforeChildren)
            .when(SequenceMode::AfterChildren)
            .build();
        assert_eq!(t.when(), Some(SequenceMode::AfterChildren));
    }
}
