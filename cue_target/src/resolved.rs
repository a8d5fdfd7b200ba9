// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved target snapshots.
//!
//! This module provides [`TargetValues`], the flat result of resolving a
//! logical state against concrete data: plain `(id, value)` pairs with typed
//! lookup. Snapshots are ephemeral — recomputed on every state change and
//! discarded once the transition they drive completes or is superseded.

use alloc::vec::Vec;
use core::fmt;

use crate::registry::{Target, TargetId};
use crate::value::TargetValue;

/// A resolved mapping of targets to concrete values.
///
/// Unlike [`TargetSet`](crate::TargetSet), which is a shared authored
/// definition, `TargetValues` is a per-resolution snapshot owned by whoever
/// requested it. The values themselves still share storage with the set they
/// came from ([`TargetValue`] is reference counted), so building a snapshot
/// does not deep-copy anything.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetId, TargetValue, TargetValues};
///
/// let values = TargetValues::from_entries(vec![
///     (TargetId::new(1), TargetValue::new(0.5_f64)),
///     (TargetId::new(0), TargetValue::new(12.0_f64)),
/// ]);
///
/// assert_eq!(values.len(), 2);
/// assert_eq!(values.get_raw(TargetId::new(1)).unwrap().downcast_ref::<f64>(), Some(&0.5));
/// ```
#[derive(Clone, Default)]
pub struct TargetValues {
    /// Sorted by `TargetId` for binary search lookup.
    entries: Vec<(TargetId, TargetValue)>,
}

impl TargetValues {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from `(id, value)` pairs.
    ///
    /// Entries are sorted by ID; if the same ID appears more than once, the
    /// last occurrence wins.
    #[must_use]
    pub fn from_entries(mut entries: Vec<(TargetId, TargetValue)>) -> Self {
        entries.sort_by_key(|(id, _)| *id);
        // Last occurrence wins: copy the later value into the retained slot.
        entries.dedup_by(|a, b| {
            if a.0 == b.0 {
                b.1 = a.1.clone();
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    /// Returns `true` if the snapshot has no values.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of values in the snapshot.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gets the value for a typed target, if present.
    #[must_use]
    pub fn get<T: 'static>(&self, target: Target<T>) -> Option<&T> {
        self.get_raw(target.id()).and_then(TargetValue::downcast_ref)
    }

    /// Gets the erased value for a target ID, if present.
    #[must_use]
    pub fn get_raw(&self, id: TargetId) -> Option<&TargetValue> {
        self.entries
            .binary_search_by_key(&id, |(tid, _)| *tid)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if the snapshot has a value for the target.
    #[must_use]
    pub fn contains(&self, id: TargetId) -> bool {
        self.get_raw(id).is_some()
    }

    /// Returns an iterator over the entries, in `TargetId` order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &TargetValue)> {
        self.entries.iter().map(|(id, v)| (*id, v))
    }

    /// Returns an iterator over the target IDs in the snapshot.
    pub fn ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}

impl fmt::Debug for TargetValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetValues")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn values_empty() {
        let values = TargetValues::new();
        assert!(values.is_empty());
        assert_eq!(values.len(), 0);
        assert!(!values.contains(TargetId::new(0)));
    }

    #[test]
    fn values_sorted_lookup() {
        let values = TargetValues::from_entries(vec![
            (TargetId::new(3), TargetValue::new(3_i32)),
            (TargetId::new(1), TargetValue::new(1_i32)),
            (TargetId::new(2), TargetValue::new(2_i32)),
        ]);

        assert_eq!(values.len(), 3);
        for i in 1..=3_u16 {
            let v = values.get_raw(TargetId::new(i)).unwrap();
            assert_eq!(v.downcast_ref::<i32>(), Some(&i32::from(i)));
        }

        let ids: Vec<_> = values.ids().collect();
        assert_eq!(
            ids,
            vec![TargetId::new(1), TargetId::new(2), TargetId::new(3)]
        );
    }

    #[test]
    fn values_last_occurrence_wins() {
        let values = TargetValues::from_entries(vec![
            (TargetId::new(1), TargetValue::new(1_i32)),
            (TargetId::new(1), TargetValue::new(2_i32)),
        ]);

        assert_eq!(values.len(), 1);
        assert_eq!(
            values.get_raw(TargetId::new(1)).unwrap().downcast_ref::<i32>(),
            Some(&2)
        );
    }

    #[test]
    fn values_typed_get() {
        use crate::Target;

        let values = TargetValues::from_entries(vec![(
            TargetId::new(4),
            TargetValue::new(0.75_f64),
        )]);

        let opacity: Target<f64> = Target::from_id(TargetId::new(4));
        assert_eq!(values.get(opacity), Some(&0.75));

        // Wrong type reads as absent.
        let as_bool: Target<bool> = Target::from_id(TargetId::new(4));
        assert_eq!(values.get(as_bool), None);
    }

    #[test]
    fn values_share_storage_with_source() {
        let original = TargetValue::new(0.5_f64);
        let values = TargetValues::from_entries(vec![(TargetId::new(0), original.clone())]);

        assert!(values.get_raw(TargetId::new(0)).unwrap().ptr_eq(&original));
    }
}
