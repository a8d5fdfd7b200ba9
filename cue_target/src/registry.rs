// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target registration and handles.
//!
//! Animation targets are declared once, up front, in a [`TargetRegistry`].
//! Registering a target yields a [`Target<T>`] handle carrying the value
//! type; the raw [`TargetId`] inside it is a dense index into the registry,
//! so entry tables elsewhere in the toolkit stay compact and sortable. The
//! registry is also the styling authority the resolver consults to decide
//! whether a value can be interpolated or must be applied immediately.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use hashbrown::HashMap;

use crate::metadata::TargetMetadata;

/// Identifies a registered animation target at runtime.
///
/// Ids are handed out densely in registration order and fit in two bytes,
/// which caps a registry at 65,536 targets — far beyond what a real set of
/// animatable properties needs — while keeping `(id, value)` entry tables
/// small enough to sort and binary-search cheaply.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(u16);

impl TargetId {
    /// Creates an id from a raw registry index.
    ///
    /// Normally ids come out of [`TargetRegistry::register`]; constructing
    /// one by hand is only useful in tests and when rebuilding handles from
    /// serialized form.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the raw registry index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetId").field(&self.0).finish()
    }
}

/// A typed handle to a registered animation target.
///
/// The phantom parameter `T` records the value type the target was
/// registered with, so authored sets and resolved snapshots can only be
/// written and read at that type:
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
///
/// let mut registry = TargetRegistry::new();
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
///
/// let fade = TargetSetBuilder::new().set(opacity, 0.0).build();
/// assert_eq!(fade.get(opacity), Some(&0.0));
/// // fade.get returns Option<&f64>; `set(opacity, "gone")` would not compile.
/// ```
///
/// Handles are the same two bytes as the [`TargetId`] they wrap, so they are
/// passed by value everywhere.
pub struct Target<T> {
    id: TargetId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Target<T> {
    /// Reconstructs a typed handle from a raw id.
    ///
    /// The id must have been registered with value type `T`. A mismatched
    /// type does not corrupt anything — typed lookups simply read as absent
    /// (see [`TargetRegistry::get_metadata`]) — but it defeats the point of
    /// the handle, so prefer keeping the value returned by
    /// [`TargetRegistry::register`].
    #[must_use]
    #[inline]
    pub const fn from_id(id: TargetId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying target id.
    #[must_use]
    #[inline]
    pub const fn id(self) -> TargetId {
        self.id
    }
}

// `T` only appears in the phantom marker, so the usual derives would demand
// bounds the handle does not need. Implement by hand instead.

impl<T> Copy for Target<T> {}

impl<T> Clone for Target<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Target<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Target<T> {}

impl<T> Hash for Target<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Target<{}>({})",
            core::any::type_name::<T>(),
            self.id.index()
        )
    }
}

/// A registration entry for a target.
///
/// This stores the target's name, type information, and metadata.
pub struct TargetRegistration {
    name: &'static str,
    type_id: TypeId,
    metadata: Box<dyn ErasedMetadata>,
}

impl TargetRegistration {
    /// Returns the target name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the target's value type.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns whether this target can be interpolated.
    #[must_use]
    #[inline]
    pub fn animatable(&self) -> bool {
        self.metadata.animatable()
    }
}

impl fmt::Debug for TargetRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRegistration")
            .field("name", &self.name)
            .field("type_id", &self.type_id)
            .field("animatable", &self.animatable())
            .finish_non_exhaustive()
    }
}

/// A registry for animation targets.
///
/// Targets are registered once at startup, and the registry provides lookup
/// by name or id as well as access to target metadata.
///
/// # Example
///
/// ```rust
/// use cue_target::{TargetMetadataBuilder, TargetRegistry};
///
/// let mut registry = TargetRegistry::new();
///
/// let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
/// let visible = registry.register(
///     "visible",
///     TargetMetadataBuilder::new(true).animatable(false).build(),
/// );
///
/// assert_eq!(registry.name(opacity.id()), Some("opacity"));
/// assert!(registry.animatable(opacity.id()));
/// assert!(!registry.animatable(visible.id()));
/// ```
#[derive(Default)]
pub struct TargetRegistry {
    targets: Vec<TargetRegistration>,
    by_name: HashMap<&'static str, TargetId>,
}

impl TargetRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new target with the given name and metadata.
    ///
    /// Returns a type-safe [`Target<T>`] handle for referring to the target.
    ///
    /// # Panics
    ///
    /// Panics if a target with the same name is already registered,
    /// or if more than 65,536 targets are registered.
    pub fn register<T: Clone + 'static>(
        &mut self,
        name: &'static str,
        metadata: TargetMetadata<T>,
    ) -> Target<T> {
        assert!(
            !self.by_name.contains_key(name),
            "Target '{name}' is already registered"
        );
        assert!(
            self.targets.len() < u16::MAX as usize,
            "Too many targets registered (max {})",
            u16::MAX
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = TargetId::new(self.targets.len() as u16);

        self.targets.push(TargetRegistration {
            name,
            type_id: TypeId::of::<T>(),
            metadata: Box::new(metadata),
        });
        self.by_name.insert(name, id);

        Target::from_id(id)
    }

    /// Returns the number of registered targets.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if no targets are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Looks up a target by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<TargetId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of a target.
    #[must_use]
    pub fn name(&self, id: TargetId) -> Option<&'static str> {
        self.targets.get(id.index() as usize).map(|r| r.name)
    }

    /// Returns the registration for a target.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&TargetRegistration> {
        self.targets.get(id.index() as usize)
    }

    /// Returns whether a target can be interpolated.
    ///
    /// Unregistered ids are reported as animatable; resolvers that need to
    /// distinguish registration failures use [`TargetRegistry::get`].
    #[must_use]
    pub fn animatable(&self, id: TargetId) -> bool {
        self.targets
            .get(id.index() as usize)
            .is_none_or(|r| r.animatable())
    }

    /// Returns the metadata for a typed target.
    ///
    /// Returns `None` if the target is not registered or the type doesn't match.
    #[must_use]
    pub fn get_metadata<T: Clone + 'static>(
        &self,
        target: Target<T>,
    ) -> Option<&TargetMetadata<T>> {
        self.targets
            .get(target.id().index() as usize)
            .and_then(|r| r.metadata.downcast_ref())
    }

    /// Returns an iterator over all registered targets.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &TargetRegistration)> {
        self.targets.iter().enumerate().map(|(i, r)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len < u16::MAX")]
            (TargetId::new(i as u16), r)
        })
    }
}

impl fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRegistry")
            .field("count", &self.targets.len())
            .field("targets", &self.by_name.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Type-erased metadata trait for heterogeneous storage.
trait ErasedMetadata: Any {
    fn as_any(&self) -> &dyn Any;
    fn animatable(&self) -> bool;
}

impl<T: Clone + 'static> ErasedMetadata for TargetMetadata<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn animatable(&self) -> bool {
        Self::animatable(self)
    }
}

impl dyn ErasedMetadata {
    fn downcast_ref<T: Clone + 'static>(&self) -> Option<&TargetMetadata<T>> {
        self.as_any().downcast_ref()
    }
}
