// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load TrueType and OpenType fonts and render single lines of text onto
//! pixel surfaces.
//!
//! The model follows SDL_ttf: a [`Library`] opens [`Font`]s at a point size,
//! fonts answer metric queries and render text in one of three
//! [`RenderMode`]s. Each font keeps the surface of its last render, which is
//! replaced by the next render and released when the font is closed.
//!
//! Fonts are parsed with Skrifa and rasterized with `tiny-skia`. No shaping,
//! kerning or line breaking is performed.
//!
//! ```no_run
//! use ttf_surface::{Library, RenderMode, RenderOptions, Surface, Text};
//!
//! let library = Library::initialized();
//! let mut font = library.open_font("Vera.ttf", 32, None)?;
//! let mut screen = Surface::new(640, 480).unwrap();
//! font.render_text(
//!     Text::Utf8("Text UTF8 - Solid"),
//!     0,
//!     50,
//!     &RenderOptions::new(RenderMode::Solid),
//!     &mut screen,
//! );
//! font.close();
//! # Ok::<(), ttf_surface::LoadError>(())
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

pub use peniko;
pub use skrifa;
pub use tiny_skia;

mod error;
mod font;
mod library;
mod metrics;
mod raster;
mod style;
mod surface;

pub use error::{LoadError, LoadErrorKind};
pub use font::{Font, close_font};
pub use library::{Library, OpenOptions, resolve_path};
pub use metrics::{FontMetrics, GlyphMetric, GlyphMetrics, TextSize};
pub use style::{Dimension, FontStyle, RenderMode, RenderOptions, RenderStatus, Text};
pub use surface::Surface;
