// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial caret navigation for structured editors.
//!
//! A structured editor arranges nested editable boxes on screen: a fraction inside a sum inside
//! a paragraph, a slot inside a block. This crate answers one question for such editors: when
//! an arrow key is pressed, which box gets the caret next?
//!
//! The engine is headless. Hosts describe their tree and its live geometry through the
//! [`CaretHost`] trait, and receive the next node to focus. Per query, the engine:
//!
//! - turns the left and right edges of sibling boxes into caret sinks ([`sink`]);
//! - merges those sinks into visual lines and sorts the lines top to bottom ([`lines`]), using
//!   an above/below relation kept in an [`EndoRelation`];
//! - walks those lines in the requested direction, drilling into children and escaping to
//!   ancestors as needed ([`CaretNavigator`]).
//!
//! Vertical moves carry a horizontal coordinate along, so repeated up/down presses track a
//! column instead of drifting with box edges. [`NavSession`] owns the focused node and the
//! selection for one editor and clears carried coordinates as focus moves on.
//!
//! Quick usage outline:
//! - Implement [`CaretHost`] for your tree.
//! - Create a [`NavSession`] with the initially focused node and a [`CaretNavigator`].
//! - Feed key names to [`NavSession::handle_key`] and move your caret to
//!   [`NavSession::focus`].
//! - To draw navigation guides, pass [`CaretNavigator::lines`] to
//!   [`guides::guide_segments_with`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for float math.
//! - `libm`: Use `core_maths` for float math in `no_std` builds.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("caret_nav requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use caret_primitives;
pub use kurbo;

mod error;
mod host;
mod session;

pub mod guides;
pub mod lines;
pub mod navigation;
pub mod relation;
pub mod sink;

pub use caret_primitives::{ArrowKey, EnterDirection, ExitDirection};
pub use error::{Error, ErrorKind};
pub use host::CaretHost;
pub use navigation::{CaretNavigator, ChildExit, NavOptions, ParentEntry};
pub use relation::EndoRelation;
pub use session::{NavSession, Selection};
pub use sink::{SinkLine, SinkMetric, SinkPoint};

use alloc::vec::Vec;

/// The node that receives focus when `key` is pressed on `node`, with default options.
///
/// See [`CaretNavigator::next`].
pub fn next<H: CaretHost>(
    host: &mut H,
    node: H::Node,
    key: ArrowKey,
) -> Result<Option<H::Node>, Error> {
    CaretNavigator::default().next(host, node, key)
}

/// The navigation lines of `parent`'s children with default options.
///
/// See [`CaretNavigator::lines`].
pub fn sink_lines<H: CaretHost>(host: &H, parent: H::Node) -> Vec<SinkLine<H::Node>> {
    CaretNavigator::default().lines(host, parent)
}
