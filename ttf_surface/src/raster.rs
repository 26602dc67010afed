// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterization of a placed line of glyphs into a [`Surface`].
//!
//! Outlines are extracted with Skrifa into `tiny-skia` paths, in pixel space
//! with the origin on the baseline, and filled or stroked into the surface.

use hashbrown::HashMap;
use peniko::Color;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider, OutlineGlyphCollection};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Rect, Stroke, Transform};

use crate::metrics::{FontMetrics, ITALIC_SKEW, LineLayout, StyleExtent};
use crate::style::{FontStyle, RenderMode};
use crate::surface::{Surface, to_tiny_skia};

/// Glyph outlines at one size and style, keyed by glyph id.
///
/// Must be cleared whenever the style or outline changes.
#[derive(Default)]
pub(crate) struct OutlineCache {
    paths: HashMap<u32, Option<Path>>,
    generation: u64,
}

impl core::fmt::Debug for OutlineCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutlineCache")
            .field("paths", &self.paths.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl OutlineCache {
    /// Drops every cached outline and starts a new generation.
    pub(crate) fn clear(&mut self) {
        self.paths.clear();
        self.generation += 1;
    }

    /// Number of times the cache has been cleared.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }

    fn get_or_insert(
        &mut self,
        outlines: &OutlineGlyphCollection<'_>,
        id: GlyphId,
        size: f32,
        skew: f32,
    ) -> Option<&Path> {
        self.paths
            .entry(id.to_u32())
            .or_insert_with(|| glyph_path(outlines, id, size, skew))
            .as_ref()
    }
}

/// Builds the outline of `id` in pixel space, y pointing down.
///
/// Returns `None` for glyphs without contours.
fn glyph_path(
    outlines: &OutlineGlyphCollection<'_>,
    id: GlyphId,
    size: f32,
    skew: f32,
) -> Option<Path> {
    let glyph = outlines.get(id)?;
    let mut pen = PathPen {
        builder: PathBuilder::new(),
        skew,
    };
    let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
    if let Err(err) = glyph.draw(settings, &mut pen) {
        log::warn!("couldn't draw outline of glyph {}: {err}", id.to_u32());
        return None;
    }
    pen.builder.finish()
}

/// Collects Skrifa outline commands into a `tiny-skia` path, flipping the
/// y-axis and applying a horizontal shear.
struct PathPen {
    builder: PathBuilder,
    skew: f32,
}

impl PathPen {
    #[inline]
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.skew * y, -y)
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Everything needed to rasterize one line.
#[derive(Debug)]
pub(crate) struct LineRaster<'a> {
    pub(crate) layout: &'a LineLayout,
    pub(crate) metrics: &'a FontMetrics,
    pub(crate) size: f32,
    pub(crate) style: FontStyle,
    pub(crate) outline: u32,
    pub(crate) mode: RenderMode,
    pub(crate) color: Color,
}

impl LineRaster<'_> {
    pub(crate) fn extent(&self) -> StyleExtent {
        StyleExtent::new(
            self.style,
            self.outline,
            self.size,
            self.metrics.ascent,
            self.metrics.descent,
        )
    }

    /// Rasterizes the line into a new surface sized to fit it.
    ///
    /// Returns `None` if the line has no extent.
    pub(crate) fn render(&self, font: &FontRef<'_>, cache: &mut OutlineCache) -> Option<Surface> {
        let extent = self.extent();
        let width = self.layout.width.checked_add(extent.extra_width())?;
        let height = self.metrics.height.checked_add(extent.extra_height())?;
        let width = u32::try_from(width).ok()?;
        let height = u32::try_from(height).ok()?;
        let mut surface = Surface::new(width, height)?;

        let mut paint = Paint::default();
        let foreground = self.color.to_rgba8();
        match self.mode {
            RenderMode::Solid => {
                paint.anti_alias = false;
                paint.set_color_rgba8(foreground.r, foreground.g, foreground.b, 255);
            }
            RenderMode::Shaded { background } => {
                surface.fill(background.with_alpha(1.0));
                paint.set_color_rgba8(foreground.r, foreground.g, foreground.b, 255);
            }
            RenderMode::Blended => paint.set_color(to_tiny_skia(self.color)),
        }

        let origin_x = (extent.left() + self.layout.origin_x) as f32;
        let baseline = (extent.outline + self.metrics.ascent) as f32;
        let skew = if self.style.contains(FontStyle::ITALIC) {
            ITALIC_SKEW
        } else {
            0.0
        };
        let outlines = font.outline_glyphs();
        let pixmap = surface.pixmap_mut();
        for glyph in &self.layout.glyphs {
            let Some(path) = cache.get_or_insert(&outlines, glyph.id, self.size, skew) else {
                continue;
            };
            let transform = Transform::from_translate(origin_x + glyph.x as f32, baseline);
            if extent.outline > 0 {
                let stroke = Stroke {
                    width: 2.0 * extent.outline as f32,
                    ..Stroke::default()
                };
                pixmap.stroke_path(path, &paint, &stroke, transform, None);
                continue;
            }
            pixmap.fill_path(path, &paint, FillRule::Winding, transform, None);
            if extent.bold > 0.0 {
                let stroke = Stroke {
                    width: extent.bold,
                    ..Stroke::default()
                };
                pixmap.stroke_path(path, &paint, &stroke, transform, None);
            }
        }

        let thickness = self.metrics.underline_thickness as f32;
        let mut decorations = Vec::new();
        if self.style.contains(FontStyle::UNDERLINE) {
            decorations.push(baseline + self.metrics.underline_offset as f32);
        }
        if self.style.contains(FontStyle::STRIKETHROUGH) {
            decorations.push(baseline - self.metrics.strikeout_offset as f32);
        }
        for top in decorations {
            if let Some(rect) = Rect::from_xywh(0.0, top, width as f32, thickness) {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }

        Some(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_flips_and_shears() {
        let mut pen = PathPen {
            builder: PathBuilder::new(),
            skew: 0.5,
        };
        pen.move_to(0.0, 0.0);
        pen.line_to(10.0, 0.0);
        pen.line_to(10.0, 10.0);
        pen.close();
        let path = pen.builder.finish().unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.right(), 15.0);
        assert_eq!(bounds.top(), -10.0);
        assert_eq!(bounds.bottom(), 0.0);
    }

    #[test]
    fn empty_pen_has_no_path() {
        let pen = PathPen {
            builder: PathBuilder::new(),
            skew: 0.0,
        };
        assert!(pen.builder.finish().is_none());
    }

    #[test]
    fn clear_bumps_generation() {
        let mut cache = OutlineCache::default();
        assert_eq!(cache.generation(), 0);
        cache.paths.insert(3, None);
        assert_eq!(cache.len(), 1);
        cache.clear();
        cache.clear();
        assert_eq!(cache.generation(), 2);
        assert_eq!(cache.len(), 0);
    }
}
