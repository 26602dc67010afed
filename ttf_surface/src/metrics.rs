// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font, glyph and line metrics in whole pixels.

use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::BoundingBox;
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use smallvec::SmallVec;

use crate::style::FontStyle;

/// Horizontal shear applied to synthetic italics.
pub(crate) const ITALIC_SKEW: f32 = 0.207;

/// Bounding box and advance of a single glyph, in pixels.
///
/// The `y` values are measured upwards from the baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    /// Left edge of the glyph's bounding box.
    pub min_x: i32,
    /// Right edge of the glyph's bounding box.
    pub max_x: i32,
    /// Bottom edge of the glyph's bounding box.
    pub min_y: i32,
    /// Top edge of the glyph's bounding box.
    pub max_y: i32,
    /// Horizontal advance to the next glyph.
    pub advance: i32,
}

impl GlyphMetrics {
    /// Returns the value of a single metric.
    pub fn get(&self, metric: GlyphMetric) -> i32 {
        match metric {
            GlyphMetric::MinX => self.min_x,
            GlyphMetric::MaxX => self.max_x,
            GlyphMetric::MinY => self.min_y,
            GlyphMetric::MaxY => self.max_y,
            GlyphMetric::Advance => self.advance,
        }
    }

    fn from_scaled(bounds: Option<BoundingBox>, advance: f32) -> Self {
        let (min_x, max_x, min_y, max_y) = match bounds {
            Some(b) => (
                b.x_min.floor() as i32,
                b.x_max.ceil() as i32,
                b.y_min.floor() as i32,
                b.y_max.ceil() as i32,
            ),
            None => (0, 0, 0, 0),
        };
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            advance: advance.ceil() as i32,
        }
    }
}

/// Selects one field of [`GlyphMetrics`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphMetric {
    /// [`GlyphMetrics::min_x`].
    MinX,
    /// [`GlyphMetrics::max_x`].
    MaxX,
    /// [`GlyphMetrics::min_y`].
    MinY,
    /// [`GlyphMetrics::max_y`].
    MaxY,
    /// [`GlyphMetrics::advance`].
    Advance,
}

/// Pixel size a line of text occupies when rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Face-wide metrics for a font at a given size, rounded the way SDL_ttf
/// rounds them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the line.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the line. Zero or negative.
    pub descent: i32,
    /// `ascent - descent + 1`.
    pub height: i32,
    /// Recommended distance between consecutive baselines.
    pub line_skip: i32,
    /// Offset of the underline below the baseline.
    pub underline_offset: i32,
    /// Thickness of underline and strikethrough lines, at least one pixel.
    pub underline_thickness: i32,
    /// Offset of the strikethrough line above the baseline.
    pub strikeout_offset: i32,
    /// Whether every glyph shares the same advance.
    pub is_fixed_width: bool,
    /// Number of faces in the font file.
    pub face_count: u32,
    /// Family name from the `name` table.
    pub family_name: Option<String>,
    /// Style (subfamily) name from the `name` table.
    pub style_name: Option<String>,
}

impl FontMetrics {
    pub(crate) fn new(font: &FontRef<'_>, size: f32, face_count: u32) -> Self {
        let metrics = font.metrics(Size::new(size), LocationRef::default());
        let ascent = metrics.ascent.ceil() as i32;
        let descent = metrics.descent.ceil() as i32;
        let line_skip = (metrics.ascent - metrics.descent + metrics.leading).ceil() as i32;
        let (underline_offset, underline_thickness) = match metrics.underline {
            Some(decoration) => (
                (-decoration.offset).round() as i32,
                decoration.thickness.round() as i32,
            ),
            None => ((-descent / 2).max(1), 0),
        };
        let strikeout_offset = match (metrics.strikeout, metrics.x_height) {
            (Some(decoration), _) => decoration.offset.round() as i32,
            (None, Some(x_height)) => (x_height / 2.0).round() as i32,
            (None, None) => ascent / 3,
        };
        Self {
            ascent,
            descent,
            height: ascent - descent + 1,
            line_skip,
            underline_offset,
            underline_thickness: underline_thickness.max(1),
            strikeout_offset,
            is_fixed_width: metrics.is_monospace,
            face_count,
            family_name: english_or_first(font, StringId::FAMILY_NAME),
            style_name: english_or_first(font, StringId::SUBFAMILY_NAME),
        }
    }
}

fn english_or_first(font: &FontRef<'_>, id: StringId) -> Option<String> {
    font.localized_strings(id)
        .english_or_first()
        .map(|name| name.to_string())
}

/// Extra pixels added around a line by synthetic styles and outlines.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct StyleExtent {
    /// Stroke width used to embolden glyphs.
    pub(crate) bold: f32,
    /// Width the italic shear adds to the right, at the top of the line.
    pub(crate) italic_right: i32,
    /// Width the italic shear adds to the left, at the bottom of the line.
    pub(crate) italic_left: i32,
    /// Outline radius on each side of the line.
    pub(crate) outline: i32,
}

impl StyleExtent {
    pub(crate) fn new(
        style: FontStyle,
        outline: u32,
        size: f32,
        ascent: i32,
        descent: i32,
    ) -> Self {
        let italic = style.contains(FontStyle::ITALIC);
        let shear = |extent: i32| {
            if italic {
                (ITALIC_SKEW * extent.max(0) as f32).ceil() as i32
            } else {
                0
            }
        };
        Self {
            bold: if style.contains(FontStyle::BOLD) {
                bold_strength(size)
            } else {
                0.0
            },
            italic_right: shear(ascent),
            italic_left: shear(-descent),
            outline: i32::try_from(outline).unwrap_or(i32::MAX / 4),
        }
    }

    /// Space left of the line origin.
    pub(crate) fn left(&self) -> i32 {
        self.outline + self.italic_left + (self.bold / 2.0).ceil() as i32
    }

    pub(crate) fn extra_width(&self) -> i32 {
        self.left() + self.outline + self.italic_right + (self.bold / 2.0).ceil() as i32
    }

    pub(crate) fn extra_height(&self) -> i32 {
        2 * self.outline
    }
}

/// Stroke width for synthetic bold at `size` pixels per em.
pub(crate) fn bold_strength(size: f32) -> f32 {
    (size / 24.0).max(1.0)
}

/// A glyph with its pen position on the line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PlacedGlyph {
    pub(crate) id: GlyphId,
    /// Pen position relative to the line origin.
    pub(crate) x: i32,
}

/// Single line of glyphs placed by their advances.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineLayout {
    pub(crate) glyphs: SmallVec<[PlacedGlyph; 32]>,
    /// Horizontal offset of the line origin inside the rendered box, so that
    /// glyphs with a negative left bearing are not clipped.
    pub(crate) origin_x: i32,
    /// Width of the inked line without style extras.
    pub(crate) width: i32,
}

impl LineLayout {
    /// Places `chars` using unkerned advances.
    ///
    /// Returns `None` if there is nothing to place or the line is wider than
    /// `i32::MAX` pixels.
    pub(crate) fn new(
        font: &FontRef<'_>,
        size: f32,
        chars: impl Iterator<Item = char>,
    ) -> Option<Self> {
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
        let mut layout = Self::default();
        let mut x: i32 = 0;
        let mut min_x: i32 = 0;
        let mut max_x: i32 = 0;
        for ch in chars {
            let id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            let metrics = GlyphMetrics::from_scaled(
                glyph_metrics.bounds(id),
                glyph_metrics.advance_width(id).unwrap_or_default(),
            );
            min_x = min_x.min(x.checked_add(metrics.min_x)?);
            max_x = max_x.max(x.checked_add(metrics.max_x.max(metrics.advance))?);
            layout.glyphs.push(PlacedGlyph { id, x });
            x = x.checked_add(metrics.advance)?;
        }
        if layout.glyphs.is_empty() {
            return None;
        }
        layout.origin_x = -min_x;
        layout.width = max_x.checked_sub(min_x)?;
        Some(layout)
    }
}

/// Metrics of the glyph mapped to `ch`, or `None` if the font has no glyph for it.
pub(crate) fn glyph_metrics(font: &FontRef<'_>, size: f32, ch: char) -> Option<GlyphMetrics> {
    let id = font.charmap().map(ch).filter(|id| *id != GlyphId::NOTDEF)?;
    let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
    Some(GlyphMetrics::from_scaled(
        glyph_metrics.bounds(id),
        glyph_metrics.advance_width(id).unwrap_or_default(),
    ))
}
