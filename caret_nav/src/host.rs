// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use caret_primitives::geom::distance_to_rect;
use kurbo::{Point, Rect};

/// The capabilities the navigation engine needs from a tree of editor nodes.
///
/// Implementers must provide:
/// - Tree structure through [`parent`](Self::parent) and [`children`](Self::children). The
///   relation must form a finite tree with a single root.
/// - Live geometry through [`bounds`](Self::bounds). Bounds are read on every query and never
///   cached, so they may change between key presses.
/// - Storage for the carried horizontal coordinate ([`carry_x`](Self::carry_x) and
///   [`set_carry_x`](Self::set_carry_x)).
///
/// The engine never inspects node contents.
pub trait CaretHost {
    /// Handle to a node. Typically an index or id into the host's own storage.
    type Node: Copy + Eq + core::fmt::Debug;

    /// The parent of `node`, or `None` for the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The children of `node`, in document order.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Bounding box of `node` in the shared coordinate space, with y growing downward.
    fn bounds(&self, node: Self::Node) -> Rect;

    /// The horizontal coordinate carried through vertical moves, if any.
    fn carry_x(&self, node: Self::Node) -> Option<f64>;

    /// Stores or clears the carried horizontal coordinate of `node`.
    fn set_carry_x(&mut self, node: Self::Node, x: Option<f64>);

    /// Returns `true` if `node` has at least one child.
    fn has_children(&self, node: Self::Node) -> bool {
        !self.children(node).is_empty()
    }

    /// The child of `node` closest to `position`, or `node` itself.
    ///
    /// Used when the caret enters `node` vertically. Each child competes with its bounding box.
    /// `node` competes with its trailing caret position, a zero-width box along its right edge,
    /// and wins ties.
    fn closest_sink_to_position(&self, node: Self::Node, position: Point) -> Self::Node {
        let bounds = self.bounds(node).abs();
        let own = Rect::new(bounds.x1, bounds.y0, bounds.x1, bounds.y1);
        let mut best = (node, distance_to_rect(own, position));
        for &child in self.children(node) {
            let distance = distance_to_rect(self.bounds(child), position);
            if distance < best.1 {
                best = (child, distance);
            }
        }
        best.0
    }
}
