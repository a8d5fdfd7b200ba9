// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge drag offsets and region-backed constraints.

use core::fmt;

use kurbo::{Rect, Vec2};

/// How far an element may be dragged past its resting position, per edge.
///
/// Offsets are in absolute units relative to the element's resting position.
/// `left`/`top` bound movement in the negative direction and are usually
/// zero or negative; `right`/`bottom` bound the positive direction. An edge
/// left as `None` is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Lower bound on the horizontal offset.
    pub left: Option<f64>,
    /// Upper bound on the horizontal offset.
    pub right: Option<f64>,
    /// Lower bound on the vertical offset.
    pub top: Option<f64>,
    /// Upper bound on the vertical offset.
    pub bottom: Option<f64>,
}

impl EdgeOffsets {
    /// Offsets with every edge unconstrained.
    pub const UNBOUNDED: Self = Self {
        left: None,
        right: None,
        top: None,
        bottom: None,
    };

    /// Restricts a drag offset to these bounds, axis by axis.
    ///
    /// Each axis is clamped independently; an unconstrained edge passes the
    /// offset through unchanged on that side.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        let mut x = offset.x;
        if let Some(left) = self.left {
            x = x.max(left);
        }
        if let Some(right) = self.right {
            x = x.min(right);
        }
        let mut y = offset.y;
        if let Some(top) = self.top {
            y = y.max(top);
        }
        if let Some(bottom) = self.bottom {
            y = y.min(bottom);
        }
        Vec2::new(x, y)
    }
}

/// A source of a boundary rectangle, measured when asked.
///
/// Implemented for [`Rect`] (a fixed region). Implement it on your own type
/// to report the current bounds of, say, a scroll container that may have
/// been re-laid-out since the constraints were authored.
pub trait RegionSource {
    /// Returns the current boundary rectangle.
    fn bounds(&self) -> Rect;
}

impl RegionSource for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Boundary values for a draggable element.
///
/// `Offsets` carries literal per-edge values. `Region` defers to a
/// [`RegionSource`] whose rectangle is measured each time the constraints
/// are resolved, so the element stays inside the region as it is today, not
/// as it was when the constraints were built.
pub enum DragConstraints<'a> {
    /// Literal per-edge offsets.
    Offsets(EdgeOffsets),
    /// Keep the element inside a measured region.
    Region(&'a dyn RegionSource),
}

impl DragConstraints<'_> {
    /// Resolves the constraints for an element at the given resting
    /// rectangle.
    ///
    /// For `Offsets` this returns the offsets as authored. For `Region` the
    /// source is measured now, and the offsets are those that keep `element`
    /// fully inside the measured rectangle. A region smaller than the
    /// element yields crossed bounds; [`EdgeOffsets::clamp`] then pins the
    /// offset to the far edge.
    #[must_use]
    pub fn resolve(&self, element: Rect) -> EdgeOffsets {
        match self {
            Self::Offsets(offsets) => *offsets,
            Self::Region(source) => {
                let region = source.bounds();
                EdgeOffsets {
                    left: Some(region.x0 - element.x0),
                    right: Some(region.x1 - element.x1),
                    top: Some(region.y0 - element.y0),
                    bottom: Some(region.y1 - element.y1),
                }
            }
        }
    }
}

impl fmt::Debug for DragConstraints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offsets(offsets) => f.debug_tuple("Offsets").field(offsets).finish(),
            Self::Region(source) => f.debug_tuple("Region").field(&source.bounds()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn unbounded_passes_offsets_through() {
        let offsets = EdgeOffsets::UNBOUNDED;
        let v = Vec2::new(-500.0, 1234.5);
        assert_eq!(offsets.clamp(v), v);
    }

    #[test]
    fn clamp_is_per_axis() {
        let offsets = EdgeOffsets {
            left: Some(-10.0),
            right: Some(10.0),
            top: None,
            bottom: Some(5.0),
        };

        assert_eq!(offsets.clamp(Vec2::new(-50.0, -50.0)), Vec2::new(-10.0, -50.0));
        assert_eq!(offsets.clamp(Vec2::new(50.0, 50.0)), Vec2::new(10.0, 5.0));
        assert_eq!(offsets.clamp(Vec2::new(3.0, 2.0)), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn partial_edges_only_clamp_their_side() {
        let offsets = EdgeOffsets {
            left: Some(0.0),
            ..EdgeOffsets::UNBOUNDED
        };

        assert_eq!(offsets.clamp(Vec2::new(-5.0, 0.0)), Vec2::new(0.0, 0.0));
        assert_eq!(offsets.clamp(Vec2::new(900.0, -900.0)), Vec2::new(900.0, -900.0));
    }

    #[test]
    fn literal_offsets_resolve_as_authored() {
        let offsets = EdgeOffsets {
            left: Some(-1.0),
            right: Some(2.0),
            top: Some(-3.0),
            bottom: Some(4.0),
        };
        let constraints = DragConstraints::Offsets(offsets);

        // The element rectangle is irrelevant for literal offsets.
        assert_eq!(constraints.resolve(Rect::new(5.0, 6.0, 7.0, 8.0)), offsets);
    }

    #[test]
    fn region_keeps_element_inside() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let element = Rect::new(40.0, 40.0, 60.0, 60.0);
        let constraints = DragConstraints::Region(&region);

        let offsets = constraints.resolve(element);
        assert_eq!(offsets.left, Some(-40.0));
        assert_eq!(offsets.right, Some(40.0));
        assert_eq!(offsets.top, Some(-40.0));
        assert_eq!(offsets.bottom, Some(40.0));

        // A drag past the region edge is pinned to it.
        assert_eq!(
            offsets.clamp(Vec2::new(75.0, -75.0)),
            Vec2::new(40.0, -40.0)
        );
    }

    #[test]
    fn region_is_measured_at_resolution_time() {
        struct Measured {
            width: Cell<f64>,
            measure_count: Cell<u32>,
        }

        impl RegionSource for Measured {
            fn bounds(&self) -> Rect {
                self.measure_count.set(self.measure_count.get() + 1);
                Rect::new(0.0, 0.0, self.width.get(), 100.0)
            }
        }

        let source = Measured {
            width: Cell::new(200.0),
            measure_count: Cell::new(0),
        };
        let element = Rect::new(0.0, 0.0, 50.0, 50.0);
        let constraints = DragConstraints::Region(&source);

        assert_eq!(constraints.resolve(element).right, Some(150.0));

        // The region shrinks; the next resolution sees the new bounds.
        source.width.set(80.0);
        assert_eq!(constraints.resolve(element).right, Some(30.0));

        assert_eq!(source.measure_count.get(), 2);
    }

    #[test]
    fn region_smaller_than_element_crosses_bounds() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        let element = Rect::new(0.0, 0.0, 20.0, 20.0);

        let offsets = DragConstraints::Region(&region).resolve(element);
        assert_eq!(offsets.left, Some(0.0));
        assert_eq!(offsets.right, Some(-10.0));

        // Clamping pins to the upper bound applied last.
        assert_eq!(offsets.clamp(Vec2::new(5.0, 5.0)).x, -10.0);
    }
}
