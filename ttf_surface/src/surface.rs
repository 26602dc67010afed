// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel surfaces that text is rendered into and blitted onto.

use std::path::Path;

use peniko::Color;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

/// An RGBA pixel buffer with premultiplied alpha.
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Creates a transparent surface.
    ///
    /// Returns `None` if either dimension is zero or the surface is too large.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    /// Wraps an existing `tiny-skia` pixmap.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the whole surface with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_tiny_skia(color));
    }

    /// Composites `src` onto this surface with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside of this surface are clipped.
    pub fn blit(&mut self, src: &Self, x: i32, y: i32) {
        self.pixmap.draw_pixmap(
            x,
            y,
            src.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Returns the colour at `(x, y)` with alpha demultiplied, or `None` when
    /// out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // `Pixmap::pixel` only bounds-checks the flat index, so rows wrap.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Returns `true` if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// The underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Encodes the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        self.pixmap.encode_png()
    }

    /// Writes the surface to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), png::EncodingError> {
        self.pixmap.save_png(path)
    }
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

pub(crate) fn to_tiny_skia(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}
