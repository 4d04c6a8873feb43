// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caret sinks: the left and right edges of boxes, assembled into navigation lines.

use alloc::vec;
use alloc::vec::Vec;

use caret_primitives::geom::segment_x_proj;
use caret_primitives::Span;
use kurbo::{Line, Point, Rect};

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "unused when `std` is also enabled")]
use core_maths::CoreFloat;

use crate::host::CaretHost;
use crate::lines::{LineMetric, merge_and_sort_lines};

/// A vertical interval anchored at a horizontal position.
///
/// Every box contributes two sinks: one along its left edge and one along its right edge.
/// Sinks produced by projection during line comparison carry no `data`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkPoint<N> {
    /// Horizontal position.
    pub n: f64,
    /// Vertical extent, `lo` being the top.
    pub interval: Span,
    /// The node this sink belongs to.
    pub data: Option<N>,
}

impl<N> SinkPoint<N> {
    /// Creates a sink at `n` spanning `interval`.
    pub fn new(n: f64, interval: Span, data: Option<N>) -> Self {
        Self { n, interval, data }
    }

    /// The sink along the left edge of `rect`.
    pub fn left_edge(rect: Rect, data: N) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, Span::vertical(rect), Some(data))
    }

    /// The sink along the right edge of `rect`.
    pub fn right_edge(rect: Rect, data: N) -> Self {
        let rect = rect.abs();
        Self::new(rect.x1, Span::vertical(rect), Some(data))
    }

    /// Top of the interval.
    pub fn top(&self) -> f64 {
        self.interval.lo
    }

    /// Bottom of the interval.
    pub fn bottom(&self) -> f64 {
        self.interval.hi
    }

    /// The sink as a single point: its horizontal position and its top.
    pub fn point(&self) -> Point {
        Point::new(self.n, self.top())
    }
}

/// A navigation line: sinks ordered left to right.
pub type SinkLine<N> = Vec<SinkPoint<N>>;

/// [`LineMetric`] for caret sinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkMetric {
    /// Exponent applied to the vertical gap between disjoint sinks.
    ///
    /// The default of `4` makes vertical gaps count far more than horizontal ones, so lines
    /// join with horizontal neighbors first.
    pub vertical_gap_power: i32,
}

impl Default for SinkMetric {
    fn default() -> Self {
        Self {
            vertical_gap_power: 4,
        }
    }
}

impl<N: Copy> LineMetric<SinkPoint<N>> for SinkMetric {
    fn is_point_left(&self, a: &SinkPoint<N>, b: &SinkPoint<N>) -> bool {
        a.n < b.n
    }

    fn is_point_below(&self, a: &SinkPoint<N>, b: &SinkPoint<N>) -> bool {
        a.top() > b.top()
    }

    fn x_proj(
        &self,
        from: &SinkPoint<N>,
        to: &SinkPoint<N>,
        point: &SinkPoint<N>,
    ) -> SinkPoint<N> {
        let p = segment_x_proj(Line::new(from.point(), to.point()), point.point());
        SinkPoint::new(p.x, Span::new(p.y, p.y), None)
    }

    fn dist(&self, a: &SinkPoint<N>, b: &SinkPoint<N>) -> f64 {
        let dx = (a.n - b.n).abs();
        match a.interval.separation(b.interval) {
            Some(gap) => (dx * dx + gap.len().powi(self.vertical_gap_power)).sqrt(),
            None => dx,
        }
    }
}

/// Builds the navigation lines for the children of `parent`.
///
/// Lines come back ordered top to bottom, each ordered left to right. A child's left and right
/// sinks are always adjacent within their line.
pub fn sink_lines<H: CaretHost>(
    host: &H,
    parent: H::Node,
    metric: &SinkMetric,
) -> Vec<SinkLine<H::Node>> {
    let lines = host
        .children(parent)
        .iter()
        .map(|&child| {
            let bounds = host.bounds(child);
            vec![
                SinkPoint::left_edge(bounds, child),
                SinkPoint::right_edge(bounds, child),
            ]
        })
        .collect();
    merge_and_sort_lines(lines, metric)
}
