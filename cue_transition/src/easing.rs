// Copyright 2025 the Cue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing descriptors.

/// The easing curve a transition asks for.
///
/// This is a descriptor, not a solver: it names the curve an external
/// animation engine should apply when interpolating. The cubic variants of
/// the named curves follow the conventional CSS control points.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    EaseOut,
    /// Slow start and finish.
    #[default]
    EaseInOut,
    /// An explicit cubic bezier curve through `(0,0)`, `(x1,y1)`, `(x2,y2)`,
    /// `(1,1)`.
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ease_in_out() {
        assert_eq!(Ease::default(), Ease::EaseInOut);
    }

    #[test]
    fn bezier_carries_control_points() {
        let ease = Ease::CubicBezier {
            x1: 0.17,
            y1: 0.67,
            x2: 0.83,
            y2: 0.67,
        };
        match ease {
            Ease::CubicBezier { x1, y2, .. } => {
                assert_eq!(x1, 0.17);
                assert_eq!(y2, 0.67);
            }
            _ => unreachable!(),
        }
    }
}
