// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use caret_nav::CaretHost;
use kurbo::Rect;

/// Handle to a node of a [`BoxTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Clone, Debug)]
struct BoxNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    bounds: Rect,
    carry_x: Option<f64>,
}

/// A minimal editor tree: an arena of boxes with explicit bounds.
#[derive(Clone, Debug)]
pub(crate) struct BoxTree {
    nodes: Vec<BoxNode>,
}

impl BoxTree {
    /// Creates a tree holding only a root with `bounds`.
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            nodes: vec![BoxNode {
                parent: None,
                children: Vec::new(),
                bounds,
                carry_x: None,
            }],
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child with `bounds` to `parent`.
    pub(crate) fn add(&mut self, parent: NodeId, bounds: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(BoxNode {
            parent: Some(parent),
            children: Vec::new(),
            bounds,
            carry_x: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn set_bounds(&mut self, node: NodeId, bounds: Rect) {
        self.nodes[node.0].bounds = bounds;
    }

    /// Removes `node` from its parent's child list while keeping its parent link.
    ///
    /// Leaves the tree inconsistent on purpose.
    pub(crate) fn orphan(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// All nodes, root first.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}

impl CaretHost for BoxTree {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn bounds(&self, node: NodeId) -> Rect {
        self.nodes[node.0].bounds
    }

    fn carry_x(&self, node: NodeId) -> Option<f64> {
        self.nodes[node.0].carry_x
    }

    fn set_carry_x(&mut self, node: NodeId, x: Option<f64>) {
        self.nodes[node.0].carry_x = x;
    }
}
