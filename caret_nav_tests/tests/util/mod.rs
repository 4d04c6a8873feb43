// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility types shared across tests.

mod box_tree;
mod rng;

pub(crate) use box_tree::{BoxTree, NodeId};
pub(crate) use rng::Rng;

/// Shorthand for `Rect::new`.
pub(crate) fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> kurbo::Rect {
    kurbo::Rect::new(x0, y0, x1, y1)
}
