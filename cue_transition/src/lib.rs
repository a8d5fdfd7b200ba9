// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cue Transition: descriptors for how a state change plays out over time.
//!
//! A [`Transition`] describes the timing of a property change — duration,
//! delay, easing — and how a parent's transition is orchestrated against its
//! children (sequencing mode, per-child stagger). Transitions are plain
//! descriptors: solving them into frames is the job of an external animation
//! engine, and scheduling children is the job of `cue_sequence`.
//!
//! ## Time is in seconds
//!
//! Every time-based parameter in this crate is expressed in **fractional
//! seconds**. A `duration` of `2.0` is two seconds, a `delay` of `0.25` is a
//! quarter of a second. This is a fixed contract, not a configuration knob;
//! there is deliberately no millisecond API.
//!
//! ## Quick Start
//!
//! ```rust
//! use cue_transition::{SequenceMode, Transition, TransitionBuilder};
//!
//! let transition = TransitionBuilder::new()
//!     .duration(0.5)
//!     .delay(0.1)
//!     .when(SequenceMode::BeforeChildren)
//!     .stagger_children(0.05)
//!     .build();
//!
//! assert_eq!(transition.duration_or_default(), 0.5);
//! assert_eq!(transition.when(), Some(SequenceMode::BeforeChildren));
//!
//! // Defaults: 0.3s duration, no delay, children together with the parent.
//! let default = Transition::default();
//! assert_eq!(default.duration_or_default(), Transition::DEFAULT_DURATION);
//! assert_eq!(default.when(), None);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod easing;
mod transition;

pub use easing::Ease;
pub use transition::{SequenceMode, StaggerDirection, Transition, TransitionBuilder};
