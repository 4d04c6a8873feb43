// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment, interval and box helpers on top of [`kurbo`].
//!
//! Vector arithmetic (add, sub, scale, dot, length, normalize) is provided by [`kurbo::Vec2`]
//! directly. The functions here fill the gaps the navigation engine needs, and each of them is
//! total: degenerate inputs such as zero-length segments produce neutral values instead of NaN.

use kurbo::{Line, Point, Rect, Vec2};

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "unused when `std` is also enabled")]
use core_maths::CoreFloat;

/// Rotates `v` counter-clockwise by `angle` radians (in a y-up frame).
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Normalizes `v`, returning the zero vector when `v` has zero length.
///
/// [`Vec2::normalize`] yields NaN components in that case.
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Linear interpolation along `segment`: `t = 0` is `p0`, `t = 1` is `p1`.
pub fn lerp(segment: Line, t: f64) -> Point {
    segment.p0.lerp(segment.p1, t)
}

/// Inverse of [`lerp`]: the parameter of the point on `segment` nearest to `point`.
///
/// The result is clamped to `[0, 1]`. Zero-length segments return `0`.
pub fn co_lerp(segment: Line, point: Point) -> f64 {
    let d = segment.p1 - segment.p0;
    let len2 = d.hypot2();
    if len2 == 0.0 {
        return 0.0;
    }
    ((point - segment.p0).dot(d) / len2).clamp(0.0, 1.0)
}

/// The point of `segment` at the horizontal coordinate of `point`.
///
/// Points outside the horizontal extent of the segment clamp to the nearest end. Segments without
/// horizontal extent project to `p0`.
pub fn segment_x_proj(segment: Line, point: Point) -> Point {
    let dx = segment.p1.x - segment.p0.x;
    let t = if dx == 0.0 {
        0.0
    } else {
        ((point.x - segment.p0.x) / dx).clamp(0.0, 1.0)
    };
    lerp(segment, t)
}

/// The point of `rect` closest to `point`.
///
/// For points outside the box this is a point on its boundary; points inside map to themselves.
pub fn closest_point_in_rect(rect: Rect, point: Point) -> Point {
    let rect = rect.abs();
    Point::new(
        point.x.clamp(rect.x0, rect.x1),
        point.y.clamp(rect.y0, rect.y1),
    )
}

/// Euclidean distance from `point` to `rect`, `0` when the point is inside.
pub fn distance_to_rect(rect: Rect, point: Point) -> f64 {
    closest_point_in_rect(rect, point).distance(point)
}

/// A closed interval `[lo, hi]` on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl Span {
    /// Creates a span from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The vertical extent of `rect`.
    pub fn vertical(rect: Rect) -> Self {
        Self::new(rect.y0, rect.y1)
    }

    /// The horizontal extent of `rect`.
    pub fn horizontal(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1)
    }

    /// Length of the span.
    pub fn len(self) -> f64 {
        self.hi - self.lo
    }

    /// Returns `true` if `value` lies within the closed span.
    pub fn contains(self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// The gap between two spans, or `None` if they overlap or touch.
    ///
    /// ```
    /// use caret_primitives::Span;
    ///
    /// assert_eq!(Span::new(20.0, 30.0).separation(Span::new(0.0, 5.0)), Some(Span::new(5.0, 20.0)));
    /// assert_eq!(Span::new(0.0, 10.0).separation(Span::new(10.0, 20.0)), None);
    /// ```
    pub fn separation(self, other: Self) -> Option<Self> {
        if self.hi < other.lo {
            Some(Self::new(self.hi, other.lo))
        } else if other.hi < self.lo {
            Some(Self::new(other.hi, self.lo))
        } else {
            None
        }
    }

    /// Length of the shared part of both spans, `0` when they are disjoint.
    pub fn overlap(self, other: Self) -> f64 {
        (self.hi.min(other.hi) - self.lo.max(other.lo)).max(0.0)
    }
}
