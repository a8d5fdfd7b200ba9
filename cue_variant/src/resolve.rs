// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of variant names into concrete target snapshots.
//!
//! This module provides [`ResolveCx`], which bundles everything needed to
//! turn a variant name plus custom data into a partitioned [`Resolved`]
//! snapshot.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use cue_target::{TargetRegistry, TargetValues};
use cue_transition::Transition;

use crate::variants::Variants;

/// Error returned when a variant name cannot be resolved.
#[derive(Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The requested name is not present in the definition.
    UnknownVariant {
        /// The name that was requested.
        name: String,
    },
}

impl fmt::Debug for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariant { name } => {
                write!(f, "UnknownVariant {{ name: {name:?} }}")
            }
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariant { name } => {
                write!(f, "no variant named {name:?} in this definition")
            }
        }
    }
}

impl core::error::Error for ResolveError {}

/// The concrete outcome of resolving a variant.
///
/// The three value sets are disjoint partitions of the variant's target:
///
/// - [`animated`](Self::animated): values the engine interpolates over
///   [`transition`](Self::transition);
/// - [`immediate`](Self::immediate): non-animatable values, applied at the
///   transition's start without interpolation;
/// - [`deferred`](Self::deferred): values applied only once the transition
///   completes.
///
/// A `Resolved` is ephemeral: it is recomputed on every state change and
/// discarded once its transition finishes or is superseded.
#[derive(Clone, Debug)]
pub struct Resolved {
    /// Values to interpolate over the transition.
    pub animated: TargetValues,
    /// Values to apply as-is when the transition starts.
    pub immediate: TargetValues,
    /// Values to apply as-is when the transition completes.
    pub deferred: TargetValues,
    /// The effective transition for this state change.
    pub transition: Transition,
}

/// Resolution context bundling the target registry and default transition.
///
/// This avoids passing the same parameters to every resolution call. The
/// registry decides which targets are animatable; the optional default
/// transition is used for variants without their own override.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
/// use cue_transition::TransitionBuilder;
/// use cue_variant::{ResolveCx, VariantsBuilder};
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
///
/// let variants = VariantsBuilder::<()>::new()
///     .fixed("hidden", TargetSetBuilder::new().set(opacity, 0.0).build())
///     .build();
///
/// let slow = TransitionBuilder::new().duration(1.5).build();
/// let cx = ResolveCx::new(&registry).with_default_transition(&slow);
///
/// let resolved = cx.resolve(&variants, "hidden", &()).unwrap();
/// assert_eq!(resolved.animated.get(opacity), Some(&0.0));
/// assert_eq!(resolved.transition.duration(), Some(1.5));
/// ```
pub struct ResolveCx<'a> {
    /// Registry classifying targets as animatable or not.
    registry: &'a TargetRegistry,
    /// Fallback transition for variants without an override.
    default_transition: Option<&'a Transition>,
}

impl fmt::Debug for ResolveCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveCx")
            .field("registry", &self.registry)
            .field("default_transition", &self.default_transition)
            .finish()
    }
}

impl<'a> ResolveCx<'a> {
    /// Creates a new resolution context.
    #[must_use]
    pub fn new(registry: &'a TargetRegistry) -> Self {
        Self {
            registry,
            default_transition: None,
        }
    }

    /// Sets the instance-default transition.
    ///
    /// A per-variant transition override replaces this wholesale; without
    /// either, resolution falls back to [`Transition::default`].
    #[must_use]
    pub fn with_default_transition(mut self, transition: &'a Transition) -> Self {
        self.default_transition = Some(transition);
        self
    }

    /// Returns a reference to the target registry.
    #[must_use]
    #[inline]
    pub fn registry(&self) -> &TargetRegistry {
        self.registry
    }

    /// Resolves a variant name against custom data.
    ///
    /// Dynamic variants are invoked with `data`; fixed variants ignore it.
    /// The variant's target is partitioned by the registry's animatability
    /// classification, with the target's deferred section passed through to
    /// [`Resolved::deferred`].
    ///
    /// Transition precedence: variant override → context default →
    /// [`Transition::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownVariant`] if `name` is not defined.
    ///
    /// # Panics
    ///
    /// Panics if the variant's target contains an ID minted by a different
    /// registry than the one this context was created with.
    pub fn resolve<D>(
        &self,
        variants: &Variants<D>,
        name: &str,
        data: &D,
    ) -> Result<Resolved, ResolveError> {
        let Some(variant) = variants.get(name) else {
            return Err(ResolveError::UnknownVariant {
                name: String::from(name),
            });
        };

        let target = variant.target_for(data);

        let mut animated = Vec::with_capacity(target.len());
        let mut immediate = Vec::new();
        for (id, value) in target.entries() {
            let Some(registration) = self.registry.get(id) else {
                panic!("Target {id:?} not found in registry");
            };
            if registration.animatable() {
                animated.push((id, value.clone()));
            } else {
                immediate.push((id, value.clone()));
            }
        }

        let mut deferred = Vec::with_capacity(target.end_len());
        for (id, value) in target.end_entries() {
            // The deferred section gets the same registration check as the
            // main entries.
            assert!(
                self.registry.get(id).is_some(),
                "Target {id:?} not found in registry"
            );
            deferred.push((id, value.clone()));
        }

        let transition = variant
            .transition()
            .or(self.default_transition)
            .cloned()
            .unwrap_or_default();

        Ok(Resolved {
            animated: TargetValues::from_entries(animated),
            immediate: TargetValues::from_entries(immediate),
            deferred: TargetValues::from_entries(deferred),
            transition,
        })
    }
}
