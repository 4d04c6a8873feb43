// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional caret navigation through a tree of boxes.
//!
//! Navigation is a small state machine of four mutually recursive steps:
//!
//! - [`CaretNavigator::next`] starts from the focused node.
//! - [`CaretNavigator::parent_from_child_next`] looks for a sibling of a child in the requested
//!   direction, escaping to the grandparent when there is none.
//! - [`CaretNavigator::child_from_parent_next`] enters a node found that way.
//! - [`CaretNavigator::parent_from_parent_next`] picks which descendant of an entered node gets
//!   the caret.
//!
//! Siblings are found through the navigation lines of [`crate::sink`], rebuilt on every step
//! from the current bounds.

use alloc::vec::Vec;

use caret_primitives::{ArrowKey, EnterDirection, ExitDirection, Span};
use kurbo::Point;

use crate::host::CaretHost;
use crate::lines::{LineMetric, find_index_2d, wrap_lines_add_x_index_2d};
use crate::sink::{SinkLine, SinkMetric, SinkPoint, sink_lines};
use crate::Error;

/// Tuning for [`CaretNavigator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavOptions {
    /// Exponent applied to vertical gaps when deciding which boxes share a line.
    ///
    /// See [`SinkMetric::vertical_gap_power`].
    pub vertical_gap_power: i32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            vertical_gap_power: SinkMetric::default().vertical_gap_power,
        }
    }
}

/// A child being left in some direction, as seen by its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildExit<N> {
    /// The child the caret is leaving.
    pub child: N,
    /// Direction of travel.
    pub direction: ExitDirection,
    /// Horizontal anchor for vertical moves.
    pub x: f64,
}

/// A node being entered from some side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParentEntry {
    /// The side the node is entered from.
    pub direction: EnterDirection,
    /// Horizontal anchor for vertical moves.
    pub x: f64,
}

/// Resolves arrow-key presses to the next focused node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CaretNavigator {
    options: NavOptions,
}

impl CaretNavigator {
    /// Creates a navigator with the given options.
    pub fn new(options: NavOptions) -> Self {
        Self { options }
    }

    /// The options this navigator was created with.
    pub fn options(&self) -> NavOptions {
        self.options
    }

    fn metric(&self) -> SinkMetric {
        SinkMetric {
            vertical_gap_power: self.options.vertical_gap_power,
        }
    }

    /// The navigation lines of `parent`'s children, top to bottom.
    pub fn lines<H: CaretHost>(&self, host: &H, parent: H::Node) -> Vec<SinkLine<H::Node>> {
        sink_lines(host, parent, &self.metric())
    }

    /// The node that receives focus when `key` is pressed while `node` is focused.
    ///
    /// Returns `Ok(None)` when there is nowhere to go; focus should stay where it is.
    ///
    /// `ArrowLeft` on a node with children moves into its last child instead of leaving it.
    /// No other key has a special case.
    pub fn next<H: CaretHost>(
        &self,
        host: &mut H,
        node: H::Node,
        key: ArrowKey,
    ) -> Result<Option<H::Node>, Error> {
        let x = host
            .carry_x(node)
            .unwrap_or_else(|| host.bounds(node).abs().x1);
        if key == ArrowKey::Left && host.has_children(node) {
            let last = self.last_child(host, node);
            log::trace!("{node:?}: entering last child {last:?}");
            let entry = ParentEntry {
                direction: EnterDirection::Right,
                x,
            };
            return Ok(self.child_from_parent_next(host, last, entry));
        }
        let Some(parent) = host.parent(node) else {
            log::trace!("{node:?}: no parent, staying put");
            return Ok(None);
        };
        let exit = ChildExit {
            child: node,
            direction: key.exit_direction(),
            x,
        };
        self.parent_from_child_next(host, parent, exit)
    }

    /// Moves from `exit.child` to a sibling, or out of `parent` when there is none.
    ///
    /// Without a sibling, rightward moves stop at `parent` itself while other directions
    /// continue with `parent` as the child of its own parent. At the root this yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ChildNotFound`](crate::ErrorKind::ChildNotFound) if `exit.child` is
    /// not a child of `parent`.
    pub fn parent_from_child_next<H: CaretHost>(
        &self,
        host: &mut H,
        parent: H::Node,
        exit: ChildExit<H::Node>,
    ) -> Result<Option<H::Node>, Error> {
        if !host.children(parent).contains(&exit.child) {
            return Err(Error::child_not_found(exit.direction));
        }
        if exit.direction.is_vertical() {
            host.set_carry_x(parent, Some(exit.x));
        }
        let candidate = match exit.direction {
            ExitDirection::Up => self.child_above(host, parent, exit.child, exit.x),
            ExitDirection::Right => self.child_after(host, parent, exit.child),
            ExitDirection::Down => self.child_below(host, parent, exit.child, exit.x),
            ExitDirection::Left => self.child_before(host, parent, exit.child),
        };
        if let Some(sibling) = candidate {
            log::trace!("{:?} -> {sibling:?} ({:?})", exit.child, exit.direction);
            let entry = ParentEntry {
                direction: exit.direction.enter(),
                x: exit.x,
            };
            return Ok(self.child_from_parent_next(host, Some(sibling), entry));
        }
        if exit.direction == ExitDirection::Right {
            log::trace!("{parent:?} absorbs rightward exit from {:?}", exit.child);
            return Ok(Some(parent));
        }
        match host.parent(parent) {
            Some(grandparent) => {
                log::trace!("escaping {parent:?} ({:?})", exit.direction);
                let exit = ChildExit {
                    child: parent,
                    ..exit
                };
                self.parent_from_child_next(host, grandparent, exit)
            }
            None => Ok(None),
        }
    }

    /// Enters `node` from `entry.direction`.
    ///
    /// Leaves take focus; nodes with children delegate to
    /// [`parent_from_parent_next`](Self::parent_from_parent_next). `None` passes through.
    pub fn child_from_parent_next<H: CaretHost>(
        &self,
        host: &mut H,
        node: Option<H::Node>,
        entry: ParentEntry,
    ) -> Option<H::Node> {
        let node = node?;
        if entry.direction.is_vertical() {
            host.set_carry_x(node, Some(entry.x));
        }
        if host.has_children(node) {
            self.parent_from_parent_next(host, node, entry)
        } else {
            Some(node)
        }
    }

    /// Picks where the caret lands inside `node` when entering it.
    ///
    /// - From the left: the first child, recursively.
    /// - From the right: `node` itself.
    /// - From above or below: the child nearest to `(entry.x, top)` or `(entry.x, bottom)`,
    ///   unless `node`'s own caret position is nearer.
    pub fn parent_from_parent_next<H: CaretHost>(
        &self,
        host: &mut H,
        node: H::Node,
        entry: ParentEntry,
    ) -> Option<H::Node> {
        match entry.direction {
            EnterDirection::Left => match self.first_child(host, node) {
                Some(first) => self.child_from_parent_next(host, Some(first), entry),
                None => Some(node),
            },
            EnterDirection::Right => Some(node),
            EnterDirection::Up | EnterDirection::Down => {
                let bounds = host.bounds(node).abs();
                let y = if entry.direction == EnterDirection::Up {
                    bounds.y0
                } else {
                    bounds.y1
                };
                let target = host.closest_sink_to_position(node, Point::new(entry.x, y));
                if target == node {
                    Some(node)
                } else {
                    self.child_from_parent_next(host, Some(target), entry)
                }
            }
        }
    }

    /// The child following `child` in line order, wrapping onto the next line.
    pub fn child_after<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
    ) -> Option<H::Node> {
        self.step_sinks(host, parent, child, 2)
    }

    /// The child preceding `child` in line order, wrapping onto the previous line.
    pub fn child_before<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
    ) -> Option<H::Node> {
        self.step_sinks(host, parent, child, -2)
    }

    /// The child on the line above `child`'s line nearest to `x`.
    pub fn child_above<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
        x: f64,
    ) -> Option<H::Node> {
        self.nearest_on_adjacent_line(host, parent, child, x, -1)
    }

    /// The child on the line below `child`'s line nearest to `x`.
    pub fn child_below<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
        x: f64,
    ) -> Option<H::Node> {
        self.nearest_on_adjacent_line(host, parent, child, x, 1)
    }

    fn step_sinks<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
        delta: isize,
    ) -> Option<H::Node> {
        let lines = self.lines(host, parent);
        let start = find_index_2d(&lines, |sink| sink.data == Some(child))?;
        let (row, col) = wrap_lines_add_x_index_2d(&lines, start, delta).inside()?;
        lines[row][col].data
    }

    fn nearest_on_adjacent_line<H: CaretHost>(
        &self,
        host: &H,
        parent: H::Node,
        child: H::Node,
        x: f64,
        delta: isize,
    ) -> Option<H::Node> {
        let lines = self.lines(host, parent);
        let (row, _) = find_index_2d(&lines, |sink| sink.data == Some(child))?;
        let line = lines.get(row.checked_add_signed(delta)?)?;
        let metric = self.metric();
        let anchor = SinkPoint::new(x, Span::vertical(host.bounds(child)), None);
        line.iter()
            .filter(|sink| sink.data.is_some())
            .min_by(|a, b| metric.dist(&anchor, *a).total_cmp(&metric.dist(&anchor, *b)))
            .and_then(|sink| sink.data)
    }

    fn first_child<H: CaretHost>(&self, host: &H, node: H::Node) -> Option<H::Node> {
        let lines = self.lines(host, node);
        lines.iter().flatten().find_map(|sink| sink.data)
    }

    fn last_child<H: CaretHost>(&self, host: &H, node: H::Node) -> Option<H::Node> {
        let lines = self.lines(host, node);
        lines.iter().rev().flat_map(|line| line.iter().rev()).find_map(|sink| sink.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Rect;

    /// A parent at index 0 with leaf children.
    struct Flat {
        rects: Vec<Rect>,
        children: Vec<usize>,
        carry: Vec<Option<f64>>,
    }

    impl Flat {
        fn new(parent: Rect, children: &[Rect]) -> Self {
            let mut rects = vec![parent];
            rects.extend_from_slice(children);
            Self {
                carry: vec![None; rects.len()],
                children: (1..rects.len()).collect(),
                rects,
            }
        }
    }

    impl CaretHost for Flat {
        type Node = usize;

        fn parent(&self, node: usize) -> Option<usize> {
            (node != 0).then_some(0)
        }

        fn children(&self, node: usize) -> &[usize] {
            if node == 0 {
                &self.children
            } else {
                &[]
            }
        }

        fn bounds(&self, node: usize) -> Rect {
            self.rects[node]
        }

        fn carry_x(&self, node: usize) -> Option<f64> {
            self.carry[node]
        }

        fn set_carry_x(&mut self, node: usize, x: Option<f64>) {
            self.carry[node] = x;
        }
    }

    fn grid() -> Flat {
        // 1 2
        // 3 4
        Flat::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &[
                Rect::new(0.0, 0.0, 90.0, 40.0),
                Rect::new(110.0, 0.0, 200.0, 40.0),
                Rect::new(0.0, 60.0, 90.0, 100.0),
                Rect::new(110.0, 60.0, 200.0, 100.0),
            ],
        )
    }

    #[test]
    fn siblings_in_line_order() {
        let host = grid();
        let nav = CaretNavigator::default();
        assert_eq!(nav.child_after(&host, 0, 1), Some(2));
        assert_eq!(nav.child_after(&host, 0, 2), Some(3), "wraps onto the next line");
        assert_eq!(nav.child_after(&host, 0, 4), None);
        assert_eq!(nav.child_before(&host, 0, 3), Some(2), "wraps onto the previous line");
        assert_eq!(nav.child_before(&host, 0, 1), None);
    }

    #[test]
    fn siblings_across_lines() {
        let host = grid();
        let nav = CaretNavigator::default();
        assert_eq!(nav.child_below(&host, 0, 1, 10.0), Some(3));
        assert_eq!(nav.child_below(&host, 0, 1, 190.0), Some(4));
        assert_eq!(nav.child_above(&host, 0, 4, 190.0), Some(2));
        assert_eq!(nav.child_above(&host, 0, 2, 190.0), None);
    }

    #[test]
    fn right_overflow_lands_on_parent() {
        let mut host = grid();
        let nav = CaretNavigator::default();
        assert_eq!(nav.next(&mut host, 4, ArrowKey::Right), Ok(Some(0)));
        assert_eq!(nav.next(&mut host, 1, ArrowKey::Left), Ok(None));
        assert_eq!(nav.next(&mut host, 1, ArrowKey::Up), Ok(None));
    }

    #[test]
    fn vertical_moves_set_carry() {
        let mut host = grid();
        let nav = CaretNavigator::default();
        assert_eq!(nav.next(&mut host, 2, ArrowKey::Down), Ok(Some(4)));
        assert_eq!(host.carry_x(0), Some(200.0));
        assert_eq!(host.carry_x(4), Some(200.0));
    }

    #[test]
    fn foreign_child_is_an_error() {
        let mut host = grid();
        let nav = CaretNavigator::default();
        let exit = ChildExit {
            child: 0,
            direction: ExitDirection::Down,
            x: 0.0,
        };
        let err = nav.parent_from_child_next(&mut host, 0, exit).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ChildNotFound);
        assert_eq!(err.direction(), Some(ExitDirection::Down));
    }

    #[test]
    fn entering_vertically_picks_nearest_child() {
        let mut host = grid();
        let nav = CaretNavigator::default();
        let entry = ParentEntry {
            direction: EnterDirection::Up,
            x: 150.0,
        };
        assert_eq!(nav.parent_from_parent_next(&mut host, 0, entry), Some(2));
        let entry = ParentEntry {
            direction: EnterDirection::Down,
            x: 20.0,
        };
        assert_eq!(nav.parent_from_parent_next(&mut host, 0, entry), Some(3));
        let entry = ParentEntry {
            direction: EnterDirection::Right,
            x: 20.0,
        };
        assert_eq!(nav.parent_from_parent_next(&mut host, 0, entry), Some(0));
    }
}
