// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single variant entries.
//!
//! This module provides [`Variant`], one named state's target — either a
//! fixed [`TargetSet`] or a pure function of caller-supplied custom data —
//! together with an optional per-variant [`Transition`] override.

use alloc::rc::Rc;
use core::fmt;

use cue_target::TargetSet;
use cue_transition::Transition;

/// One logical animation state: a target and an optional transition override.
///
/// The target side is a tagged union: either a fixed set of values, or a
/// function from opaque custom data `D` to a set. Dynamic targets must be
/// **pure** — the produced set may depend only on the supplied data — so a
/// single shared definition resolves independently for every instance.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
/// use cue_transition::TransitionBuilder;
/// use cue_variant::Variant;
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
///
/// // Fixed state with its own (slower) transition.
/// let hidden: Variant<f64> = Variant::fixed(
///     TargetSetBuilder::new().set(opacity, 0.0).build(),
/// )
/// .with_transition(TransitionBuilder::new().duration(0.8).build());
///
/// // Dynamic state: the destination opacity is the custom data itself.
/// let visible: Variant<f64> = Variant::dynamic(move |target: &f64| {
///     TargetSetBuilder::new().set(opacity, *target).build()
/// });
///
/// assert!(!hidden.is_dynamic());
/// assert!(visible.is_dynamic());
/// assert_eq!(visible.target_for(&0.5).get(opacity), Some(&0.5));
/// ```
pub struct Variant<D> {
    target: VariantTarget<D>,
    transition: Option<Transition>,
}

/// The target side of a variant: fixed values or a function of custom data.
enum VariantTarget<D> {
    Fixed(TargetSet),
    Dynamic(Rc<dyn Fn(&D) -> TargetSet>),
}

impl<D> Variant<D> {
    /// Creates a variant with a fixed target set.
    ///
    /// Fixed variants ignore custom data entirely: resolving them yields the
    /// same set every time.
    #[must_use]
    pub fn fixed(target: TargetSet) -> Self {
        Self {
            target: VariantTarget::Fixed(target),
            transition: None,
        }
    }

    /// Creates a variant whose target is computed from custom data.
    ///
    /// The function must be pure: its output may depend only on the supplied
    /// data, never on shared mutable state.
    #[must_use]
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&D) -> TargetSet + 'static,
    {
        Self {
            target: VariantTarget::Dynamic(Rc::new(f)),
            transition: None,
        }
    }

    /// Attaches a per-variant transition override.
    ///
    /// When set, this transition replaces the resolution context's default
    /// wholesale for this variant.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Returns the per-variant transition override, if any.
    #[must_use]
    #[inline]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Returns `true` if the target is computed from custom data.
    #[must_use]
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.target, VariantTarget::Dynamic(_))
    }

    /// Produces the concrete target set for the given custom data.
    ///
    /// Fixed variants hand back their shared set (a reference-count bump);
    /// dynamic variants invoke their function with `data`.
    #[must_use]
    pub fn target_for(&self, data: &D) -> TargetSet {
        match &self.target {
            VariantTarget::Fixed(set) => set.clone(),
            VariantTarget::Dynamic(f) => f(data),
        }
    }
}

// Manual impls: `D` only appears behind `Rc<dyn Fn>`, so no `D: Clone`/`Debug`
// bounds are needed.

impl<D> Clone for Variant<D> {
    fn clone(&self) -> Self {
        Self {
            target: match &self.target {
                VariantTarget::Fixed(set) => VariantTarget::Fixed(set.clone()),
                VariantTarget::Dynamic(f) => VariantTarget::Dynamic(Rc::clone(f)),
            },
            transition: self.transition.clone(),
        }
    }
}

impl<D> fmt::Debug for Variant<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target: &dyn fmt::Debug = match &self.target {
            VariantTarget::Fixed(set) => set,
            VariantTarget::Dynamic(_) => &"Dynamic(..)",
        };
        f.debug_struct("Variant")
            .field("target", target)
            .field("transition", &self.transition)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use cue_target::{Target, TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
    use cue_transition::TransitionBuilder;

    fn opacity_target() -> (TargetRegistry, Target<f64>) {
        let mut registry = TargetRegistry::new();
        let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
        (registry, opacity)
    }

    #[test]
    fn fixed_ignores_data() {
        let (_, opacity) = opacity_target();
        let variant: Variant<i32> =
            Variant::fixed(TargetSetBuilder::new().set(opacity, 0.0).build());

        assert!(!variant.is_dynamic());
        assert_eq!(variant.target_for(&1).get(opacity), Some(&0.0));
        assert_eq!(variant.target_for(&-40).get(opacity), Some(&0.0));
    }

    #[test]
    fn dynamic_uses_data() {
        let (_, opacity) = opacity_target();
        let variant: Variant<f64> = Variant::dynamic(move |target| {
            TargetSetBuilder::new().set(opacity, *target).build()
        });

        assert!(variant.is_dynamic());
        assert_eq!(variant.target_for(&0.25).get(opacity), Some(&0.25));
        assert_eq!(variant.target_for(&1.0).get(opacity), Some(&1.0));
    }

    #[test]
    fn transition_override_attaches() {
        let (_, opacity) = opacity_target();
        let variant: Variant<()> =
            Variant::fixed(TargetSetBuilder::new().set(opacity, 0.0).build())
                .with_transition(TransitionBuilder::new().duration(0.8).build());

        assert_eq!(variant.transition().unwrap().duration(), Some(0.8));
    }

    #[test]
    fn clone_shares_fixed_target() {
        let (_, opacity) = opacity_target();
        let variant: Variant<()> =
            Variant::fixed(TargetSetBuilder::new().set(opacity, 0.0).build());
        let clone = variant.clone();

        assert_eq!(clone.target_for(&()).get(opacity), Some(&0.0));
    }

    #[test]
    fn debug_formats_both_shapes() {
        let (_, opacity) = opacity_target();
        let fixed: Variant<()> =
            Variant::fixed(TargetSetBuilder::new().set(opacity, 0.0).build());
        let dynamic: Variant<()> =
            Variant::dynamic(move |()| TargetSetBuilder::new().set(opacity, 1.0).build());

        assert!(format!("{fixed:?}").contains("Variant"));
        assert!(format!("{dynamic:?}").contains("Dynamic"));
    }
}
