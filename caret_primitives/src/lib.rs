// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental types for spatial caret navigation.
//!
//! This crate is a small, `no_std`-friendly vocabulary layer shared by the navigation engine and
//! by hosts that feed it geometry. It contains:
//!
//! - [`geom`]: segment interpolation and projection, closed intervals ([`Span`]), and the
//!   closest-point metric between points and boxes. Vectors, points, segments and rectangles are
//!   the [`kurbo`] types.
//! - The arrow-key and direction vocabulary: [`ArrowKey`], [`ExitDirection`] and
//!   [`EnterDirection`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for float math.
//! - `libm`: Use `core_maths` for float math in `no_std` builds.
//!
//! ## Example
//!
//! ```
//! use caret_primitives::{ArrowKey, EnterDirection, ExitDirection, Span};
//!
//! let key = ArrowKey::parse("ArrowRight").unwrap();
//! assert_eq!(key.exit_direction(), ExitDirection::Right);
//! assert_eq!(key.exit_direction().enter(), EnterDirection::Left);
//!
//! let gap = Span::new(0.0, 10.0).separation(Span::new(14.0, 20.0));
//! assert_eq!(gap, Some(Span::new(10.0, 14.0)));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("caret_primitives requires either the `std` or `libm` feature to be enabled");

mod direction;
pub mod geom;

pub use kurbo;

pub use direction::{
    ArrowKey, EnterDirection, ExitDirection, ParseArrowKeyError,
    enter_direction_from_exit_direction, exit_direction_from_enter_direction,
};
pub use geom::Span;
