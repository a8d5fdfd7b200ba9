// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cue Sequence: when a parent and its children start animating.
//!
//! Given a parent [`Transition`](cue_transition::Transition) and a child
//! count, [`Timeline`] computes concrete start offsets — in fractional
//! seconds from the moment the state change is applied — honoring the
//! transition's delay, child delay, per-child stagger, stagger direction,
//! and sequencing mode (before/after children).
//!
//! Like the rest of the toolkit, this crate computes schedules from
//! pre-resolved inputs; it does not drive a clock. The caller supplies the
//! children's own transition duration (resolved per child elsewhere) so the
//! after-children mode can know when the last child finishes.
//!
//! ## Quick Start
//!
//! ```rust
//! use cue_sequence::Timeline;
//! use cue_transition::{SequenceMode, TransitionBuilder};
//!
//! let t = TransitionBuilder::new()
//!     .duration(0.5)
//!     .when(SequenceMode::BeforeChildren)
//!     .stagger_children(0.1)
//!     .build();
//!
//! let timeline = Timeline::new(&t, 3, 0.3);
//!
//! // Parent runs first; children follow, staggered 0.1s apart.
//! assert_eq!(timeline.parent_start(), 0.0);
//! assert_eq!(timeline.child_starts(), &[0.5, 0.6, 0.7]);
//!
//! // Deferred values apply at the completion instant.
//! assert_eq!(timeline.completion(), 1.0);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod timeline;

pub use timeline::Timeline;
