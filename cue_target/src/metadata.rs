// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target metadata definitions.
//!
//! This module provides [`TargetMetadata`] for storing target configuration
//! and [`TargetMetadataBuilder`] for ergonomic construction.

/// Metadata for a registered animation target.
///
/// This contains the configuration for a target: its default (resting) value
/// and whether it is *animatable*. A non-animatable target cannot be
/// interpolated between two values; resolvers apply it immediately at the
/// start of a transition instead of tweening it.
///
/// # Example
///
/// ```rust
/// use cue_target::TargetMetadataBuilder;
///
/// let metadata = TargetMetadataBuilder::new(1.0_f64).build();
/// assert_eq!(metadata.default_value(), &1.0);
/// assert!(metadata.animatable());
///
/// let display = TargetMetadataBuilder::new(true).animatable(false).build();
/// assert!(!display.animatable());
/// ```
#[derive(Debug, Clone)]
pub struct TargetMetadata<T: Clone + 'static> {
    default_value: T,
    animatable: bool,
}

impl<T: Clone + 'static> TargetMetadata<T> {
    /// Creates new target metadata with the given default value.
    ///
    /// Targets are animatable by default.
    #[must_use]
    pub fn new(default_value: T) -> Self {
        Self {
            default_value,
            animatable: true,
        }
    }

    /// Returns a reference to the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Returns whether this target can be interpolated.
    #[must_use]
    #[inline]
    pub fn animatable(&self) -> bool {
        self.animatable
    }
}

/// Builder for [`TargetMetadata`].
///
/// # Example
///
/// ```rust
/// use cue_target::TargetMetadataBuilder;
///
/// let metadata = TargetMetadataBuilder::new(0.0_f64)
///     .animatable(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TargetMetadataBuilder<T: Clone + 'static> {
    default_value: T,
    animatable: bool,
}

impl<T: Clone + 'static> TargetMetadataBuilder<T> {
    /// Creates a new builder with the given default value.
    #[must_use]
    pub fn new(default_value: T) -> Self {
        Self {
            default_value,
            animatable: true,
        }
    }

    /// Sets whether this target can be interpolated.
    ///
    /// When `false`, resolvers place the target's value in the immediately
    /// applied portion of a resolution rather than the animated portion.
    #[must_use]
    pub fn animatable(mut self, animatable: bool) -> Self {
        self.animatable = animatable;
        self
    }

    /// Builds the [`TargetMetadata`].
    #[must_use]
    pub fn build(self) -> TargetMetadata<T> {
        TargetMetadata {
            default_value: self.default_value,
            animatable: self.animatable,
        }
    }
}
