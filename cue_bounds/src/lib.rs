// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cue Bounds: boundary values for constrained dragging.
//!
//! A draggable element is constrained either by literal per-edge offsets
//! ([`EdgeOffsets`]) or by an externally measured region ([`RegionSource`]).
//! [`DragConstraints::resolve`] turns either form into concrete offsets for
//! a given element rectangle, reading measured regions at resolution time so
//! layout changes between gestures are picked up.
//!
//! The gesture engine itself (pointer tracking, momentum, elastic overshoot)
//! is an external collaborator; this crate only produces the boundary values
//! it consumes.
//!
//! ## Minimal example
//!
//! ```
//! use cue_bounds::{DragConstraints, EdgeOffsets};
//! use kurbo::Vec2;
//!
//! // Allow horizontal dragging up to 100 units either way; lock the
//! // vertical axis.
//! let constraints = DragConstraints::Offsets(EdgeOffsets {
//!     left: Some(-100.0),
//!     right: Some(100.0),
//!     top: Some(0.0),
//!     bottom: Some(0.0),
//! });
//!
//! let offsets = constraints.resolve(kurbo::Rect::ZERO);
//! assert_eq!(offsets.clamp(Vec2::new(250.0, 40.0)), Vec2::new(100.0, 0.0));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not require `alloc`. Enable the `libm`
//! feature when compiling without `std`.

#![no_std]

mod constraints;

pub use constraints::{DragConstraints, EdgeOffsets, RegionSource};
