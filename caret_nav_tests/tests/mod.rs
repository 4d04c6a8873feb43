// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `caret_nav`.
//!
//! - The `util` module holds [`util::BoxTree`], an arena of boxes implementing `CaretHost`,
//!   plus a deterministic generator for layout fuzzing.
//! - Tests are grouped by topic. Put the topic at the start of a test's name, e.g.
//!   `navigation_down_keeps_column` rather than `keeps_column_navigating_down`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod session;
mod util;
