// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared variant definitions.
//!
//! This module provides [`Variants`], a shared name → [`Variant`] map
//! authored once and referenced by many independent component instances.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use cue_target::TargetSet;
use hashbrown::HashMap;

use crate::variant::Variant;

/// A shared, immutable mapping from variant names to variants.
///
/// Names are unique within one definition (later builder insertions replace
/// earlier ones). Cloning is a reference-count bump, so the same definition
/// can be handed to any number of component instances; resolution never
/// mutates it.
///
/// Definitions are immutable after creation. Use [`VariantsBuilder`] to
/// construct them.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
/// use cue_variant::VariantsBuilder;
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
///
/// let variants = VariantsBuilder::<()>::new()
///     .fixed("visible", TargetSetBuilder::new().set(opacity, 1.0).build())
///     .fixed("hidden", TargetSetBuilder::new().set(opacity, 0.0).build())
///     .build();
///
/// assert_eq!(variants.len(), 2);
/// assert!(variants.contains("hidden"));
/// assert!(variants.get("collapsed").is_none());
/// ```
pub struct Variants<D> {
    inner: Rc<VariantsData<D>>,
}

/// Internal storage for variant definitions.
struct VariantsData<D> {
    by_name: HashMap<String, Variant<D>>,
}

impl<D> Variants<D> {
    /// Returns `true` if no variants are defined.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.by_name.is_empty()
    }

    /// Returns the number of defined variants.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.by_name.len()
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variant<D>> {
        self.inner.by_name.get(name)
    }

    /// Returns `true` if a variant with the given name is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.by_name.contains_key(name)
    }

    /// Returns an iterator over the defined variant names.
    ///
    /// Iteration order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.by_name.keys().map(String::as_str)
    }
}

impl<D> Clone for Variants<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D> fmt::Debug for Variants<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variants")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing [`Variants`] definitions.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
/// use cue_variant::{Variant, VariantsBuilder};
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
///
/// let variants = VariantsBuilder::new()
///     .fixed("hidden", TargetSetBuilder::new().set(opacity, 0.0).build())
///     .dynamic("visible", move |target: &f64| {
///         TargetSetBuilder::new().set(opacity, *target).build()
///     })
///     .build();
///
/// assert!(variants.get("visible").unwrap().is_dynamic());
/// ```
pub struct VariantsBuilder<D> {
    by_name: HashMap<String, Variant<D>>,
}

impl<D> VariantsBuilder<D> {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Inserts a variant under the given name.
    ///
    /// If the name was already present, the previous variant is replaced.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, variant: Variant<D>) -> Self {
        self.by_name.insert(name.into(), variant);
        self
    }

    /// Inserts a fixed variant under the given name.
    ///
    /// Shorthand for `variant(name, Variant::fixed(target))`.
    #[must_use]
    pub fn fixed(self, name: impl Into<String>, target: TargetSet) -> Self {
        self.variant(name, Variant::fixed(target))
    }

    /// Inserts a dynamic variant under the given name.
    ///
    /// Shorthand for `variant(name, Variant::dynamic(f))`.
    #[must_use]
    pub fn dynamic<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&D) -> TargetSet + 'static,
    {
        self.variant(name, Variant::dynamic(f))
    }

    /// Builds the definition.
    #[must_use]
    pub fn build(self) -> Variants<D> {
        Variants {
            inner: Rc::new(VariantsData {
                by_name: self.by_name,
            }),
        }
    }
}

impl<D> Default for VariantsBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for VariantsBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantsBuilder")
            .field("names", &self.by_name.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_target::{Target, TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};

    fn opacity_target() -> (TargetRegistry, Target<f64>) {
        let mut registry = TargetRegistry::new();
        let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
        (registry, opacity)
    }

    #[test]
    fn empty_definition() {
        let variants = VariantsBuilder::<()>::new().build();
        assert!(variants.is_empty());
        assert_eq!(variants.len(), 0);
        assert!(variants.get("visible").is_none());
    }

    #[test]
    fn lookup_by_name() {
        let (_, opacity) = opacity_target();

        let variants = VariantsBuilder::<()>::new()
            .fixed("visible", TargetSetBuilder::new().set(opacity, 1.0).build())
            .fixed("hidden", TargetSetBuilder::new().set(opacity, 0.0).build())
            .build();

        assert_eq!(variants.len(), 2);
        assert!(variants.contains("visible"));
        assert!(variants.contains("hidden"));
        assert!(!variants.contains("collapsed"));

        let hidden = variants.get("hidden").unwrap();
        assert_eq!(hidden.target_for(&()).get(opacity), Some(&0.0));
    }

    #[test]
    fn later_insertion_replaces() {
        let (_, opacity) = opacity_target();

        let variants = VariantsBuilder::<()>::new()
            .fixed("visible", TargetSetBuilder::new().set(opacity, 0.5).build())
            .fixed("visible", TargetSetBuilder::new().set(opacity, 1.0).build())
            .build();

        assert_eq!(variants.len(), 1);
        let visible = variants.get("visible").unwrap();
        assert_eq!(visible.target_for(&()).get(opacity), Some(&1.0));
    }

    #[test]
    fn clone_shares_definition() {
        let (_, opacity) = opacity_target();

        let variants = VariantsBuilder::<()>::new()
            .fixed("visible", TargetSetBuilder::new().set(opacity, 1.0).build())
            .build();
        let shared = variants.clone();

        assert!(Rc::ptr_eq(&variants.inner, &shared.inner));
        assert!(shared.contains("visible"));
    }

    #[test]
    fn names_iteration() {
        let (_, opacity) = opacity_target();

        let variants = VariantsBuilder::<()>::new()
            .fixed("a", TargetSetBuilder::new().set(opacity, 0.0).build())
            .fixed("b", TargetSetBuilder::new().set(opacity, 1.0).build())
            .build();

        let mut names: Vec<_> = variants.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "b"]);
    }
}
