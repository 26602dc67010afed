// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open font handles.

use peniko::FontData;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::library::Library;
use crate::metrics::{
    self, FontMetrics, GlyphMetric, GlyphMetrics, LineLayout, StyleExtent, TextSize,
};
use crate::raster::{LineRaster, OutlineCache};
use crate::style::{Dimension, FontStyle, RenderOptions, RenderStatus, Text};
use crate::surface::Surface;

/// A font opened at a fixed size.
///
/// Each font owns at most one rendered surface: every render replaces the
/// previous one. Dropping the font releases the surface and the font data.
///
/// Fonts borrow the [`Library`] that opened them, so the library cannot be
/// shut down while any font is still open.
pub struct Font<'lib> {
    library: &'lib Library,
    data: FontData,
    size: f32,
    metrics: FontMetrics,
    style: FontStyle,
    outline: u32,
    outlines: OutlineCache,
    cached: Option<Surface>,
}

impl<'lib> Font<'lib> {
    /// Widest outline accepted by [`Font::set_outline`], in pixels.
    pub const MAX_OUTLINE: u32 = 1024;

    pub(crate) fn new(
        library: &'lib Library,
        data: FontData,
        size: f32,
        metrics: FontMetrics,
    ) -> Self {
        Self {
            library,
            data,
            size,
            metrics,
            style: FontStyle::NORMAL,
            outline: 0,
            outlines: OutlineCache::default(),
            cached: None,
        }
    }

    /// Releases the font and its cached surface.
    ///
    /// Equivalent to dropping it.
    pub fn close(self) {}

    /// The raw font data and face index.
    pub fn data(&self) -> &FontData {
        &self.data
    }

    /// Pixels per em this font was opened at.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// All face metrics at once.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Maximum pixel height of all glyphs, `ascent - descent + 1`.
    pub fn height(&self) -> i32 {
        self.metrics.height
    }

    /// Offset from the baseline to the top of the font.
    pub fn ascent(&self) -> i32 {
        self.metrics.ascent
    }

    /// Offset from the baseline to the bottom of the font. Zero or negative.
    pub fn descent(&self) -> i32 {
        self.metrics.descent
    }

    /// Recommended pixel distance between two lines of text.
    pub fn line_skip(&self) -> i32 {
        self.metrics.line_skip
    }

    /// Number of faces in the font file.
    pub fn face_count(&self) -> u32 {
        self.metrics.face_count
    }

    /// Whether the face is monospaced.
    pub fn is_fixed_width(&self) -> bool {
        self.metrics.is_fixed_width
    }

    /// Family name of the face, such as "Bitstream Vera Sans".
    pub fn family_name(&self) -> Option<&str> {
        self.metrics.family_name.as_deref()
    }

    /// Style name of the face, such as "Roman" or "Bold".
    pub fn style_name(&self) -> Option<&str> {
        self.metrics.style_name.as_deref()
    }

    /// Current synthetic style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Sets the synthetic style.
    ///
    /// Every call flushes the outline cache, even when `style` equals the
    /// current style. Compare against [`Font::style`] first to avoid
    /// needless re-rasterization.
    pub fn set_style(&mut self, style: FontStyle) {
        log::trace!("font style {:?} -> {style:?}", self.style);
        self.style = style;
        self.outlines.clear();
    }

    /// Outline width in pixels, or zero for filled glyphs.
    pub fn outline(&self) -> u32 {
        self.outline
    }

    /// Renders glyph contours `outline` pixels wide instead of filled glyphs.
    ///
    /// Values above [`Font::MAX_OUTLINE`] are clamped. Flushes the outline
    /// cache.
    pub fn set_outline(&mut self, outline: u32) {
        self.outline = outline.min(Self::MAX_OUTLINE);
        self.outlines.clear();
    }

    /// Number of times the outline cache has been flushed.
    pub fn cache_generation(&self) -> u64 {
        self.outlines.generation()
    }

    /// Number of glyph outlines currently cached.
    pub fn cached_outlines(&self) -> usize {
        self.outlines.len()
    }

    /// Returns `true` if the font has a glyph for `ch`.
    pub fn glyph_is_provided(&self, ch: char) -> bool {
        font_ref(&self.data)
            .and_then(|font| font.charmap().map(ch))
            .is_some_and(|id| id != GlyphId::NOTDEF)
    }

    /// Metrics of the glyph for `ch`.
    ///
    /// Returns `None` if the font has no glyph for `ch`.
    pub fn glyph_metrics(&self, ch: char) -> Option<GlyphMetrics> {
        metrics::glyph_metrics(&font_ref(&self.data)?, self.size, ch)
    }

    /// A single metric of the glyph for `ch`.
    pub fn glyph_metric(&self, ch: char, metric: GlyphMetric) -> Option<i32> {
        self.glyph_metrics(ch).map(|m| m.get(metric))
    }

    /// Size of `text` if it were rendered with the current style, without
    /// rendering it.
    ///
    /// Returns `None` for empty text, or text too wide to measure in pixels.
    pub fn size_text(&self, text: Text<'_>) -> Option<TextSize> {
        let font = font_ref(&self.data)?;
        let layout = LineLayout::new(&font, self.size, text.chars())?;
        let extent = StyleExtent::new(
            self.style,
            self.outline,
            self.size,
            self.metrics.ascent,
            self.metrics.descent,
        );
        Some(TextSize {
            width: layout.width.checked_add(extent.extra_width())?,
            height: self.metrics.height.checked_add(extent.extra_height())?,
        })
    }

    /// One dimension of [`Font::size_text`].
    pub fn measure_text(&self, text: Text<'_>, dimension: Dimension) -> Option<i32> {
        let size = self.size_text(text)?;
        Some(match dimension {
            Dimension::Width => size.width,
            Dimension::Height => size.height,
        })
    }

    /// The surface produced by the last successful render, if any.
    pub fn cached_surface(&self) -> Option<&Surface> {
        self.cached.as_ref()
    }

    /// Renders `text` into this font's cached surface and returns it.
    ///
    /// The previous cached surface is released first. Returns `None` when
    /// nothing could be rendered, including for [`Text::Unicode`].
    pub fn render(&mut self, text: Text<'_>, options: &RenderOptions) -> Option<&Surface> {
        match self.render_cached(text, options)? {
            RenderStatus::Rendered { .. } => self.cached.as_ref(),
            RenderStatus::Unsupported => None,
        }
    }

    /// Renders `text` and blits it onto `target` with its top-left corner at
    /// `(x, y)`.
    ///
    /// The previous cached surface is released first and the new one is kept
    /// until the next render or until the font is closed.
    ///
    /// [`Text::Unicode`] is not rendered: the call returns
    /// [`RenderStatus::Unsupported`] and leaves `target` untouched. Returns
    /// `None` if rasterization fails, for example for empty text.
    pub fn render_text(
        &mut self,
        text: Text<'_>,
        x: i32,
        y: i32,
        options: &RenderOptions,
        target: &mut Surface,
    ) -> Option<RenderStatus> {
        let status = self.render_cached(text, options)?;
        if let (RenderStatus::Rendered { .. }, Some(surface)) = (status, &self.cached) {
            target.blit(surface, x, y);
        }
        Some(status)
    }

    fn render_cached(
        &mut self,
        text: Text<'_>,
        options: &RenderOptions,
    ) -> Option<RenderStatus> {
        if let Some(style) = options.style {
            if style != self.style {
                self.set_style(style);
            }
        }
        self.cached = None;
        if let Text::Unicode(_) = text {
            log::trace!("UTF-16 text is not rendered");
            return Some(RenderStatus::Unsupported);
        }
        let surface = {
            let font = font_ref(&self.data)?;
            let layout = LineLayout::new(&font, self.size, text.chars())?;
            let raster = LineRaster {
                layout: &layout,
                metrics: &self.metrics,
                size: self.size,
                style: self.style,
                outline: self.outline,
                mode: options.mode,
                color: options.color,
            };
            raster.render(&font, &mut self.outlines)?
        };
        log::trace!(
            "rendered {} glyphs into {}x{} {:?} surface",
            text.chars().count(),
            surface.width(),
            surface.height(),
            options.mode
        );
        let status = RenderStatus::Rendered {
            width: surface.width(),
            height: surface.height(),
        };
        self.cached = Some(surface);
        Some(status)
    }
}

impl Drop for Font<'_> {
    fn drop(&mut self) {
        self.cached = None;
        self.library.font_closed();
        log::debug!(
            "closed font {:?} ({} px)",
            self.metrics.family_name.as_deref().unwrap_or("<unnamed>"),
            self.size
        );
    }
}

impl core::fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("family_name", &self.metrics.family_name)
            .field("index", &self.data.index)
            .field("size", &self.size)
            .field("style", &self.style)
            .field("outline", &self.outline)
            .field("outlines", &self.outlines)
            .field("cached", &self.cached)
            .finish_non_exhaustive()
    }
}

fn font_ref(data: &FontData) -> Option<FontRef<'_>> {
    FontRef::from_index(data.data.data(), data.index).ok()
}

/// Closes the font in `slot`, leaving `None` behind.
///
/// Closing an empty slot does nothing, so this can be called unconditionally
/// on every exit path.
pub fn close_font(slot: &mut Option<Font<'_>>) {
    if let Some(font) = slot.take() {
        font.close();
    }
}

#[cfg(test)]
mod tests {
    use crate::{GlyphMetric, Library, RenderMode, RenderOptions, Text};

    #[test]
    fn close_font_on_empty_slot_is_noop() {
        let mut slot = None;
        super::close_font(&mut slot);
        super::close_font(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn set_style_flushes_outlines() {
        let path = ttf_surface_dev::test_font();
        let library = Library::initialized();
        let mut font = library.open_font(&path, 24, None).unwrap();
        font.render(Text::Utf8("abc"), &RenderOptions::new(RenderMode::Blended))
            .unwrap();
        assert_eq!(font.cached_outlines(), 3);
        font.set_style(font.style());
        assert_eq!(font.cached_outlines(), 0);
        assert_eq!(font.cache_generation(), 1);
    }

    #[test]
    fn missing_glyph_has_no_metrics() {
        let path = ttf_surface_dev::test_font();
        let library = Library::initialized();
        let font = library.open_font(&path, 24, None).unwrap();
        // A private use code point no text font maps.
        let ch = '\u{10fffd}';
        assert!(!font.glyph_is_provided(ch));
        assert_eq!(font.glyph_metric(ch, GlyphMetric::Advance), None);
        assert!(font.glyph_is_provided('A'));
    }
}
