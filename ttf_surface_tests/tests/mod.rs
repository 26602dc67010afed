// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `ttf_surface`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared utilities are defined once.
//! - Tests render with the DejaVu Sans font bundled in `ttf_surface_dev`. Set
//!   `TTF_SURFACE_TEST_FONT` to run them against another font file.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `render_solid_height` rather than `solid_render_height`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod metrics;
#[macro_use]
mod util;
