// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cue Variant: named, reusable animation states and their resolution.
//!
//! A *variant* maps a name ("visible", "hidden", "expanded") to the target
//! values that state animates toward. A variant's target can be a fixed
//! [`TargetSet`](cue_target::TargetSet), or a pure function of caller-supplied
//! *custom data*, so one shared definition can produce different concrete
//! targets per component instance.
//!
//! ## Core Concepts
//!
//! ### Definitions
//!
//! [`Variants`] is a shared, immutable name → [`Variant`] map. Definitions
//! are authored once and referenced by any number of independent instances;
//! resolving one never mutates shared state.
//!
//! ### Resolution
//!
//! [`ResolveCx`] bundles the [`TargetRegistry`](cue_target::TargetRegistry)
//! (which classifies animatability) and an optional instance-default
//! [`Transition`](cue_transition::Transition). Resolving a variant name
//! produces a [`Resolved`] snapshot partitioned into three disjoint parts:
//!
//! - `animated` — values the engine interpolates over the transition,
//! - `immediate` — non-animatable values, applied at the transition's start,
//! - `deferred` — values applied only once the transition completes,
//!
//! plus the effective [`Transition`](cue_transition::Transition) (the
//! variant's own override if present, else the context default, else the
//! stock transition).
//!
//! ## Quick Start
//!
//! ```rust
//! use cue_target::{TargetMetadataBuilder, TargetRegistry, TargetSetBuilder};
//! use cue_variant::{ResolveCx, Variant, VariantsBuilder};
//!
//! let mut registry = TargetRegistry::new();
//! let opacity = registry.register("opacity", TargetMetadataBuilder::new(1.0_f64).build());
//!
//! // `visible` depends on custom data; `hidden` is fixed.
//! let variants = VariantsBuilder::new()
//!     .dynamic("visible", move |target: &f64| {
//!         TargetSetBuilder::new().set(opacity, *target).build()
//!     })
//!     .fixed("hidden", TargetSetBuilder::new().set(opacity, 0.0).build())
//!     .build();
//!
//! let cx = ResolveCx::new(&registry);
//!
//! let shown = cx.resolve(&variants, "visible", &1.0).unwrap();
//! assert_eq!(shown.animated.get(opacity), Some(&1.0));
//!
//! let hidden = cx.resolve(&variants, "hidden", &0.25).unwrap();
//! assert_eq!(hidden.animated.get(opacity), Some(&0.0));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod resolve;
mod variant;
mod variants;

pub use resolve::{ResolveCx, ResolveError, Resolved};
pub use variant::Variant;
pub use variants::{Variants, VariantsBuilder};
