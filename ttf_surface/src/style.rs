// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering styles, modes and text encodings.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use peniko::Color;

/// Set of synthetic style flags applied when rendering a font.
///
/// Flags combine with `|`. No combination is rejected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FontStyle(u8);

impl FontStyle {
    /// No style flags.
    pub const NORMAL: Self = Self(0);
    /// Emboldened outlines.
    pub const BOLD: Self = Self(1 << 0);
    /// Slanted outlines.
    pub const ITALIC: Self = Self(1 << 1);
    /// A line below the baseline.
    pub const UNDERLINE: Self = Self(1 << 2);
    /// A line through the middle of the text.
    pub const STRIKETHROUGH: Self = Self(1 << 3);

    /// Creates a style from raw bits. Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Returns the raw bits of this style.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flags are set.
    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FontStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FontStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FontStyle {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for FontStyle {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits_truncate(!self.0)
    }
}

impl core::fmt::Debug for FontStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_normal() {
            return f.write_str("FontStyle(NORMAL)");
        }
        let names = [
            (Self::BOLD, "BOLD"),
            (Self::ITALIC, "ITALIC"),
            (Self::UNDERLINE, "UNDERLINE"),
            (Self::STRIKETHROUGH, "STRIKETHROUGH"),
        ];
        f.write_str("FontStyle(")?;
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// Rasterization quality used when rendering text.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum RenderMode {
    /// Single colour, no anti-aliasing, transparent background.
    #[default]
    Solid,
    /// Anti-aliased text over an opaque box of the given background colour.
    Shaded {
        /// Colour of the box behind the text. Its alpha is ignored.
        background: Color,
    },
    /// Anti-aliased text with alpha-blended edges and a transparent background.
    Blended,
}

/// Options for a single render call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// How the text is rasterized.
    pub mode: RenderMode,
    /// Foreground colour. Alpha is only honoured by [`RenderMode::Blended`].
    pub color: Color,
    /// Style to apply before rendering.
    ///
    /// When `None`, the font keeps its current style. When `Some`, the style
    /// is only changed if it differs from the current one.
    pub style: Option<FontStyle>,
}

impl RenderOptions {
    /// Creates options for `mode` with a black foreground.
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the foreground colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the style applied before rendering.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Solid,
            color: Color::BLACK,
            style: None,
        }
    }
}

/// Text to measure or render, tagged with its encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Text<'a> {
    /// Single-byte text, each byte a Latin-1 code point.
    Latin1(&'a [u8]),
    /// UTF-8 text.
    Utf8(&'a str),
    /// A single code point.
    Glyph(char),
    /// UTF-16 code units.
    ///
    /// Can be measured but is not rendered, see [`RenderStatus::Unsupported`].
    Unicode(&'a [u16]),
}

impl Text<'_> {
    /// Returns an iterator over the code points of the text.
    ///
    /// Unpaired UTF-16 surrogates decode to U+FFFD.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let (latin1, utf8, glyph, unicode) = match *self {
            Text::Latin1(bytes) => (Some(bytes), None, None, None),
            Text::Utf8(text) => (None, Some(text), None, None),
            Text::Glyph(ch) => (None, None, Some(ch), None),
            Text::Unicode(units) => (None, None, None, Some(units)),
        };
        let latin1 = latin1
            .into_iter()
            .flat_map(|bytes| bytes.iter().map(|&b| char::from(b)));
        let utf8 = utf8.into_iter().flat_map(str::chars);
        let unicode = unicode.into_iter().flat_map(|units| {
            char::decode_utf16(units.iter().copied())
                .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        });
        latin1.chain(utf8).chain(glyph).chain(unicode)
    }
}

/// Selects one side of a measured line of text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// Horizontal extent in pixels.
    Width,
    /// Vertical extent in pixels.
    Height,
}

/// Outcome of a successful render call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// A surface of the given size was rendered, cached and blitted.
    Rendered {
        /// Width of the rendered surface in pixels.
        width: u32,
        /// Height of the rendered surface in pixels.
        height: u32,
    },
    /// The text encoding has no renderer. Nothing was drawn and the font
    /// holds no cached surface.
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_flags_combine() {
        let style = FontStyle::BOLD | FontStyle::UNDERLINE;
        assert!(style.contains(FontStyle::BOLD));
        assert!(style.contains(FontStyle::UNDERLINE));
        assert!(!style.contains(FontStyle::ITALIC));
        assert_eq!(style & !FontStyle::BOLD, FontStyle::UNDERLINE);
        assert!(FontStyle::default().is_normal());
        assert_eq!(FontStyle::from_bits_truncate(0xff).bits(), 0b1111);
    }

    #[test]
    fn style_debug() {
        assert_eq!(format!("{:?}", FontStyle::NORMAL), "FontStyle(NORMAL)");
        assert_eq!(
            format!("{:?}", FontStyle::ITALIC | FontStyle::STRIKETHROUGH),
            "FontStyle(ITALIC | STRIKETHROUGH)"
        );
    }

    #[test]
    fn text_chars_per_encoding() {
        let latin1: Vec<char> = Text::Latin1(b"caf\xe9").chars().collect();
        assert_eq!(latin1, ['c', 'a', 'f', 'é']);

        let utf8: Vec<char> = Text::Utf8("añb").chars().collect();
        assert_eq!(utf8, ['a', 'ñ', 'b']);

        let glyph: Vec<char> = Text::Glyph('Q').chars().collect();
        assert_eq!(glyph, ['Q']);

        let units: Vec<u16> = "h😊".encode_utf16().chain([0xd800]).collect();
        let unicode: Vec<char> = Text::Unicode(&units).chars().collect();
        assert_eq!(unicode, ['h', '😊', char::REPLACEMENT_CHARACTER]);
    }

    #[test]
    fn render_options_builder() {
        let options = RenderOptions::new(RenderMode::Blended)
            .with_color(Color::WHITE)
            .with_style(FontStyle::ITALIC);
        assert_eq!(options.mode, RenderMode::Blended);
        assert_eq!(options.color, Color::WHITE);
        assert_eq!(options.style, Some(FontStyle::ITALIC));
        assert_eq!(RenderOptions::default().style, None);
    }
}
