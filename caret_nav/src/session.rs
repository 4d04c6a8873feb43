// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus and selection state owned by one editing session.

use caret_primitives::ArrowKey;

use crate::host::CaretHost;
use crate::navigation::CaretNavigator;
use crate::Error;

/// A range of nodes between an anchor and a focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection<N> {
    /// Where the selection started.
    pub anchor: N,
    /// Where the selection currently ends; this node has focus.
    pub focus: N,
}

/// The focused node of a tree and an optional selection anchor.
///
/// Each root editor owns one session. Moving focus away from a node clears that node's carried
/// horizontal coordinate, so the next vertical move starting from it anchors afresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSession<N> {
    focus: N,
    anchor: Option<N>,
}

impl<N: Copy + Eq + core::fmt::Debug> NavSession<N> {
    /// Creates a session with `focus` focused and nothing selected.
    pub fn new(focus: N) -> Self {
        Self {
            focus,
            anchor: None,
        }
    }

    /// The focused node.
    pub fn focus(&self) -> N {
        self.focus
    }

    /// The current selection, if one has been extended from an anchor.
    pub fn selection(&self) -> Option<Selection<N>> {
        self.anchor.map(|anchor| Selection {
            anchor,
            focus: self.focus,
        })
    }

    /// Drops the selection, keeping focus where it is.
    pub fn collapse(&mut self) {
        self.anchor = None;
    }

    /// Focuses `node` directly, e.g. after a pointer click, and collapses the selection.
    pub fn set_focus<H: CaretHost<Node = N>>(&mut self, host: &mut H, node: N) {
        self.anchor = None;
        self.move_focus(host, node);
    }

    /// Handles a key by name.
    ///
    /// With `extend`, the selection anchor stays put (being set to the current focus if there
    /// was no selection) and only the focus moves. Returns whether focus moved.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownKey`](crate::ErrorKind::UnknownKey) for names other than the
    /// four arrow keys, and propagates navigation errors.
    pub fn handle_key<H: CaretHost<Node = N>>(
        &mut self,
        host: &mut H,
        navigator: &CaretNavigator,
        key: &str,
        extend: bool,
    ) -> Result<bool, Error> {
        let key: ArrowKey = key.parse().map_err(Error::unknown_key)?;
        self.handle_arrow(host, navigator, key, extend)
    }

    /// Handles an arrow key. See [`handle_key`](Self::handle_key).
    pub fn handle_arrow<H: CaretHost<Node = N>>(
        &mut self,
        host: &mut H,
        navigator: &CaretNavigator,
        key: ArrowKey,
        extend: bool,
    ) -> Result<bool, Error> {
        let Some(next) = navigator.next(host, self.focus, key)? else {
            return Ok(false);
        };
        if extend {
            self.anchor.get_or_insert(self.focus);
        } else {
            self.anchor = None;
        }
        Ok(self.move_focus(host, next))
    }

    fn move_focus<H: CaretHost<Node = N>>(&mut self, host: &mut H, node: N) -> bool {
        if node == self.focus {
            return false;
        }
        host.set_carry_x(self.focus, None);
        self.focus = node;
        true
    }
}
