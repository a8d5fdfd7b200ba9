// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared target set definitions.
//!
//! This module provides [`TargetSet`], a shared collection of target values
//! that a logical state animates toward, and [`TargetSetBuilder`] to
//! construct one.
//!
//! # Implementation
//!
//! Entries are kept in a sorted vector with binary-search lookup: contiguous
//! memory, no hash buckets, and O(log n) lookup is fast for the typical
//! handful of targets per state. The first few entries are stored inline via
//! `SmallVec`. Deferred entries live in a separate out-of-line vector since
//! most sets have none.

use alloc::rc::Rc;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::registry::{Target, TargetId};
use crate::value::TargetValue;

/// Default inline capacity for target entries.
///
/// Most states drive fewer than 8 targets, so this avoids heap allocation
/// in the common case.
const INLINE_CAPACITY: usize = 8;

/// A shared, immutable collection of target values.
///
/// A `TargetSet` describes the destination of a logical state: which targets
/// change and the values they move to. Sets are authored once and can be
/// referenced by many independent component instances; cloning is a
/// reference-count bump.
///
/// A set may also carry a *deferred section* (see
/// [`TargetSetBuilder::set_at_end`]): values that apply only once the
/// transition completes rather than at its start.
///
/// Sets are immutable after creation. Use [`TargetSetBuilder`] to construct
/// them.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
/// let scale = registry.register("scale", TargetMetadataBuilder::new(1.0_f64).build());
///
/// let expanded = TargetSetBuilder::new()
///     .set(opacity, 1.0)
///     .set(scale, 1.2)
///     .build();
///
/// // Sets can be cloned cheaply (`Rc`)
/// let shared = expanded.clone();
///
/// assert_eq!(expanded.get(opacity), Some(&1.0));
/// assert_eq!(shared.get(scale), Some(&1.2));
/// ```
#[derive(Clone, Debug)]
pub struct TargetSet {
    inner: Rc<TargetSetData>,
}

/// Internal storage for target set entries.
#[derive(Debug, Default)]
struct TargetSetData {
    /// Main entries, sorted by `TargetId` for binary search lookup.
    entries: SmallVec<[(TargetId, TargetValue); INLINE_CAPACITY]>,
    /// Deferred entries, sorted by `TargetId`.
    ///
    /// Stored out-of-line so sets without a deferred section pay nothing
    /// beyond an empty `Vec`.
    end_entries: Vec<(TargetId, TargetValue)>,
}

impl TargetSet {
    /// Returns `true` if this set has no entries in either section.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty() && self.inner.end_entries.is_empty()
    }

    /// Returns the number of main (non-deferred) entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns the number of deferred entries.
    #[must_use]
    #[inline]
    pub fn end_len(&self) -> usize {
        self.inner.end_entries.len()
    }

    /// Gets the main value for a target, if set.
    #[must_use]
    pub fn get<T: 'static>(&self, target: Target<T>) -> Option<&T> {
        self.inner
            .entries
            .binary_search_by_key(&target.id(), |(id, _)| *id)
            .ok()
            .and_then(|idx| self.inner.entries[idx].1.downcast_ref())
    }

    /// Gets the deferred value for a target, if set.
    #[must_use]
    pub fn get_at_end<T: 'static>(&self, target: Target<T>) -> Option<&T> {
        self.inner
            .end_entries
            .binary_search_by_key(&target.id(), |(id, _)| *id)
            .ok()
            .and_then(|idx| self.inner.end_entries[idx].1.downcast_ref())
    }

    /// Returns `true` if this set has a main value for the target.
    #[must_use]
    pub fn contains<T: 'static>(&self, target: Target<T>) -> bool {
        self.inner
            .entries
            .binary_search_by_key(&target.id(), |(id, _)| *id)
            .is_ok()
    }

    /// Returns an iterator over the main entries, in `TargetId` order.
    pub fn entries(&self) -> impl Iterator<Item = (TargetId, &TargetValue)> {
        self.inner.entries.iter().map(|(id, v)| (*id, v))
    }

    /// Returns an iterator over the deferred entries, in `TargetId` order.
    pub fn end_entries(&self) -> impl Iterator<Item = (TargetId, &TargetValue)> {
        self.inner.end_entries.iter().map(|(id, v)| (*id, v))
    }

    /// Returns an iterator over the target IDs with main values.
    pub fn ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.inner.entries.iter().map(|(id, _)| *id)
    }
}

/// Builder for constructing [`TargetSet`] instances.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
/// let visible = registry.register(
///     "visible",
///     TargetMetadataBuilder::new(true).animatable(false).build(),
/// );
///
/// // Fade out, then flip visibility once the fade has finished.
/// let hidden = TargetSetBuilder::new()
///     .set(opacity, 0.0)
///     .set_at_end(visible, false)
///     .build();
///
/// assert_eq!(hidden.get(opacity), Some(&0.0));
/// assert_eq!(hidden.get_at_end(visible), Some(&false));
/// ```
#[derive(Debug, Default)]
pub struct TargetSetBuilder {
    entries: SmallVec<[(TargetId, TargetValue); INLINE_CAPACITY]>,
    end_entries: Vec<(TargetId, TargetValue)>,
}

impl TargetSetBuilder {
    /// Creates a new empty target set builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a main value in the set.
    ///
    /// If the target was already set, the value is replaced.
    #[must_use]
    pub fn set<T: 'static>(mut self, target: Target<T>, value: T) -> Self {
        let id = target.id();
        let erased = TargetValue::new(value);

        match self.entries.binary_search_by_key(&id, |(tid, _)| *tid) {
            Ok(idx) => {
                self.entries[idx].1 = erased;
            }
            Err(idx) => {
                self.entries.insert(idx, (id, erased));
            }
        }
        self
    }

    /// Sets a deferred value in the set.
    ///
    /// Deferred values are applied only once the transition completes,
    /// instead of at its start. If the target already had a deferred value,
    /// it is replaced.
    #[must_use]
    pub fn set_at_end<T: 'static>(mut self, target: Target<T>, value: T) -> Self {
        let id = target.id();
        let erased = TargetValue::new(value);

        match self.end_entries.binary_search_by_key(&id, |(tid, _)| *tid) {
            Ok(idx) => {
                self.end_entries[idx].1 = erased;
            }
            Err(idx) => {
                self.end_entries.insert(idx, (id, erased));
            }
        }
        self
    }

    /// Builds the target set.
    #[must_use]
    pub fn build(self) -> TargetSet {
        TargetSet {
            inner: Rc::new(TargetSetData {
                entries: self.entries,
                end_entries: self.end_entries,
            }),
        }
    }
}
