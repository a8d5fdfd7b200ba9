// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased target value storage.
//!
//! This module provides [`TargetValue`] for storing target values of any type
//! in a heterogeneous collection.

use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

/// A type-erased, immutable target value.
///
/// This wraps a value of any `'static` type behind an `Rc`, storing its type
/// information for later downcasting. Values are immutable once erased, so
/// cloning a `TargetValue` is a reference-count bump: authored sets and the
/// resolved snapshots derived from them share a single allocation per value.
///
/// # Example
///
/// ```rust
/// use cue_target::TargetValue;
///
/// let value = TargetValue::new(0.5_f64);
/// assert!(value.is::<f64>());
/// assert_eq!(value.downcast_ref::<f64>(), Some(&0.5));
/// assert_eq!(value.downcast_ref::<i32>(), None);
/// ```
#[derive(Clone)]
pub struct TargetValue {
    inner: Rc<dyn Any>,
    type_id: TypeId,
}

impl TargetValue {
    /// Creates a new erased value from a concrete value.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Rc::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Returns `true` if `self` and `other` share the same underlying
    /// allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TargetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetValue")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn value_f64() {
        let value = TargetValue::new(0.5_f64);
        assert!(value.is::<f64>());
        assert!(!value.is::<i32>());
        assert_eq!(value.downcast_ref::<f64>(), Some(&0.5));
        assert_eq!(value.downcast_ref::<i32>(), None);
    }

    #[test]
    fn value_string() {
        let value = TargetValue::new(String::from("block"));
        assert!(value.is::<String>());
        assert_eq!(
            value.downcast_ref::<String>().map(|s| s.as_str()),
            Some("block")
        );
    }

    #[test]
    fn value_clone_shares_storage() {
        let value = TargetValue::new(42_i32);
        let cloned = value.clone();

        assert_eq!(cloned.downcast_ref::<i32>(), Some(&42));
        assert_eq!(value.downcast_ref::<i32>(), Some(&42));
        assert!(value.ptr_eq(&cloned));
    }

    #[test]
    fn value_type_id() {
        let value = TargetValue::new(42_i32);
        assert_eq!(value.type_id(), TypeId::of::<i32>());
    }

    #[test]
    fn value_debug() {
        let value = TargetValue::new(42_i32);
        let debug = format!("{:?}", value);
        assert!(debug.contains("TargetValue"));
        assert!(debug.contains("type_id"));
    }
}
