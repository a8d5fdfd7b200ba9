// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cue Target: typed animation-target properties and target value sets.
//!
//! This crate provides the vocabulary that the rest of the toolkit animates:
//! registered target properties ([`Target`], [`TargetRegistry`]), type-erased
//! values ([`TargetValue`]), authored property→value mappings ([`TargetSet`]),
//! and the resolved snapshots produced from them ([`TargetValues`]).
//!
//! ## Core Concepts
//!
//! ### Targets
//!
//! A *target* is a named, typed property an animation can drive — opacity,
//! an offset, a color, a display flag. Targets are registered once in a
//! [`TargetRegistry`], which hands back a compact typed handle:
//!
//! ```rust
//! use cue_target::{TargetMetadataBuilder, TargetRegistry};
//!
//! let mut registry = TargetRegistry::new();
//! let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
//! let x = registry.register("x", TargetMetadataBuilder::new(0.0_f64).build());
//!
//! assert_eq!(registry.name(opacity.id()), Some("opacity"));
//! assert_eq!(registry.by_name("x"), Some(x.id()));
//! ```
//!
//! Registration metadata classifies whether a target is *animatable*. A
//! non-animatable target (a display mode, a z-order) cannot be interpolated;
//! resolvers apply its value immediately at the start of a transition rather
//! than tweening it:
//!
//! ```rust
//! use cue_target::{TargetMetadataBuilder, TargetRegistry};
//!
//! let mut registry = TargetRegistry::new();
//! let visible = registry.register(
//!     "visible",
//!     TargetMetadataBuilder::new(true).animatable(false).build(),
//! );
//!
//! assert!(!registry.animatable(visible.id()));
//! ```
//!
//! ### Target sets
//!
//! [`TargetSet`] is a shared, immutable mapping from targets to the values a
//! state animates toward. Like a stylesheet rule, one set is authored once
//! and referenced by many independent consumers. A set may carry a separate
//! *deferred section*: values that apply only once the transition completes
//! (for example hiding an element after it has faded out).
//!
//! ```rust
//! use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
//!
//! let mut registry = TargetRegistry::new();
//! let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
//! let visible = registry.register(
//!     "visible",
//!     TargetMetadataBuilder::new(true).animatable(false).build(),
//! );
//!
//! let hidden = TargetSetBuilder::new()
//!     .set(opacity, 0.0)
//!     .set_at_end(visible, false)
//!     .build();
//!
//! assert_eq!(hidden.get(opacity), Some(&0.0));
//! assert_eq!(hidden.get_at_end(visible), Some(&false));
//! ```
//!
//! ### Resolved snapshots
//!
//! [`TargetValues`] is the flat, ephemeral result of resolving a state:
//! plain `(id, value)` pairs with typed lookup. Snapshots are recomputed on
//! every state change and discarded when the transition they drive ends.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod metadata;
mod registry;
mod resolved;
mod set;
mod value;

pub use metadata::{TargetMetadata, TargetMetadataBuilder};
pub use registry::{Target, TargetId, TargetRegistration, TargetRegistry};
pub use resolved::TargetValues;
pub use set::{TargetSet, TargetSetBuilder};
pub use value::TargetValue;
