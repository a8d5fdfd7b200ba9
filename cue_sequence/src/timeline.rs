// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orchestration timeline computation.

use alloc::vec::Vec;

use cue_transition::{SequenceMode, StaggerDirection, Transition};

/// Concrete start offsets for a parent transition and its children.
///
/// All values are in fractional seconds, measured from the moment the state
/// change is applied. The timeline is a pure computation over a
/// [`Transition`] — constructing one does not start anything.
///
/// # Sequencing
///
/// - No mode: parent and children start together (children still honor
///   `delay_children` and stagger).
/// - [`SequenceMode::BeforeChildren`]: every child additionally waits for
///   the parent's own duration.
/// - [`SequenceMode::AfterChildren`]: the parent waits until the last child
///   has finished.
///
/// # Example
///
/// ```rust
/// use cue_sequence::Timeline;
/// use cue_transition::{StaggerDirection, TransitionBuilder};
///
/// let t = TransitionBuilder::new()
///     .delay_children(0.2)
///     .stagger_children(0.1)
///     .stagger_direction(StaggerDirection::Reverse)
///     .build();
///
/// let timeline = Timeline::new(&t, 3, 0.3);
///
/// // Reverse stagger: the last child starts first.
/// assert_eq!(timeline.child_starts(), &[0.4, 0.3, 0.2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    parent_start: f64,
    parent_duration: f64,
    child_starts: Vec<f64>,
    child_duration: f64,
}

impl Timeline {
    /// Computes the timeline for a parent transition and `child_count`
    /// children, each of which runs for `child_duration` seconds.
    ///
    /// The child duration is whatever the children's own transitions
    /// resolve to; callers resolve it per child and pass the result in.
    #[must_use]
    pub fn new(transition: &Transition, child_count: usize, child_duration: f64) -> Self {
        let base = transition.delay();
        let parent_duration = transition.duration_or_default();

        let offset = |i: usize| {
            let rank = match transition.stagger_direction() {
                StaggerDirection::Forward => i,
                StaggerDirection::Reverse => child_count - 1 - i,
            };
            transition.delay_children() + transition.stagger_children() * rank as f64
        };

        let (parent_start, child_base) = match transition.when() {
            None => (base, base),
            Some(SequenceMode::BeforeChildren) => (base, base + parent_duration),
            Some(SequenceMode::AfterChildren) => {
                // Parent waits for the last child to finish.
                let children_span = (0..child_count)
                    .map(|i| offset(i) + child_duration)
                    .fold(0.0_f64, f64::max);
                (base + children_span, base)
            }
        };

        let child_starts = (0..child_count).map(|i| child_base + offset(i)).collect();

        Self {
            parent_start,
            parent_duration,
            child_starts,
            child_duration,
        }
    }

    /// Returns when the parent's own transition starts, in seconds.
    #[must_use]
    #[inline]
    pub fn parent_start(&self) -> f64 {
        self.parent_start
    }

    /// Returns when the parent's own transition ends, in seconds.
    #[must_use]
    #[inline]
    pub fn parent_end(&self) -> f64 {
        self.parent_start + self.parent_duration
    }

    /// Returns the number of children in the timeline.
    #[must_use]
    #[inline]
    pub fn child_count(&self) -> usize {
        self.child_starts.len()
    }

    /// Returns when child `index` starts, in seconds.
    #[must_use]
    pub fn child_start(&self, index: usize) -> Option<f64> {
        self.child_starts.get(index).copied()
    }

    /// Returns all child start offsets, in child order.
    #[must_use]
    pub fn child_starts(&self) -> &[f64] {
        &self.child_starts
    }

    /// Returns the completion instant: when the parent and every child have
    /// finished, in seconds.
    ///
    /// This is the moment deferred target values apply.
    #[must_use]
    pub fn completion(&self) -> f64 {
        self.child_starts
            .iter()
            .map(|start| start + self.child_duration)
            .fold(self.parent_end(), f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_transition::TransitionBuilder;

    #[test]
    fn together_by_default() {
        let t = TransitionBuilder::new().duration(0.5).build();
        let timeline = Timeline::new(&t, 2, 0.5);

        assert_eq!(timeline.parent_start(), 0.0);
        assert_eq!(timeline.child_starts(), &[0.0, 0.0]);
        assert_eq!(timeline.completion(), 0.5);
    }

    #[test]
    fn durations_are_seconds() {
        // A duration of `2` is two seconds, so completion lands at 2.0,
        // not at 2000.
        let t = TransitionBuilder::new().duration(2.0).build();
        let timeline = Timeline::new(&t, 0, 0.0);

        assert_eq!(timeline.parent_end(), 2.0);
        assert_eq!(timeline.completion(), 2.0);
    }

    #[test]
    fn stagger_forward() {
        let t = TransitionBuilder::new().stagger_children(0.1).build();
        let timeline = Timeline::new(&t, 3, 0.3);

        assert_eq!(timeline.child_starts(), &[0.0, 0.1, 0.2]);
        assert_eq!(timeline.child_start(1), Some(0.1));
        assert_eq!(timeline.child_start(3), None);
    }

    #[test]
    fn stagger_reverse() {
        let t = TransitionBuilder::new()
            .stagger_children(0.1)
            .stagger_direction(StaggerDirection::Reverse)
            .build();
        let timeline = Timeline::new(&t, 3, 0.3);

        assert_eq!(timeline.child_starts(), &[0.2, 0.1, 0.0]);
    }

    #[test]
    fn delay_children_shifts_all() {
        let t = TransitionBuilder::new()
            .delay_children(0.25)
            .stagger_children(0.1)
            .build();
        let timeline = Timeline::new(&t, 2, 0.3);

        assert_eq!(timeline.child_starts(), &[0.25, 0.35]);
    }

    #[test]
    fn before_children_waits_for_parent() {
        let t = TransitionBuilder::new()
            .duration(0.5)
            .when(SequenceMode::BeforeChildren)
            .stagger_children(0.1)
            .build();
        let timeline = Timeline::new(&t, 2, 0.3);

        assert_eq!(timeline.parent_start(), 0.0);
        assert_eq!(timeline.parent_end(), 0.5);
        assert_eq!(timeline.child_starts(), &[0.5, 0.6]);
        assert_eq!(timeline.completion(), 0.9);
    }

    #[test]
    fn after_children_waits_for_last_child() {
        let t = TransitionBuilder::new()
            .duration(0.5)
            .when(SequenceMode::AfterChildren)
            .stagger_children(0.1)
            .build();
        let timeline = Timeline::new(&t, 3, 0.3);

        // Children run first, staggered.
        assert_eq!(timeline.child_starts(), &[0.0, 0.1, 0.2]);
        // Parent starts once the last child ends (0.2 + 0.3).
        assert_eq!(timeline.parent_start(), 0.5);
        assert_eq!(timeline.completion(), 1.0);
    }

    #[test]
    fn after_children_with_no_children_starts_immediately() {
        let t = TransitionBuilder::new()
            .duration(0.5)
            .when(SequenceMode::AfterChildren)
            .build();
        let timeline = Timeline::new(&t, 0, 0.3);

        assert_eq!(timeline.parent_start(), 0.0);
        assert_eq!(timeline.child_count(), 0);
        assert_eq!(timeline.completion(), 0.5);
    }

    #[test]
    fn delay_shifts_everything() {
        let t = TransitionBuilder::new()
            .duration(0.5)
            .delay(1.0)
            .when(SequenceMode::BeforeChildren)
            .build();
        let timeline = Timeline::new(&t, 1, 0.2);

        assert_eq!(timeline.parent_start(), 1.0);
        assert_eq!(timeline.child_starts(), &[1.5]);
        assert_eq!(timeline.completion(), 1.7);
    }

    #[test]
    fn default_duration_fallback() {
        let t = TransitionBuilder::new().build();
        let timeline = Timeline::new(&t, 0, 0.0);

        assert_eq!(timeline.parent_end(), Transition::DEFAULT_DURATION);
    }
}
