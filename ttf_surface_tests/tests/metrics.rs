// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ttf_surface::{Dimension, GlyphMetric, Text};

use crate::testenv;

#[test]
fn metrics_height_spans_ascent_and_descent() {
    let env = testenv!();
    for size in [12, 16, 32, 48] {
        let font = env.font(size);
        assert!(font.ascent() > 0);
        assert!(font.descent() <= 0);
        assert_eq!(font.height(), font.ascent() - font.descent() + 1);
        assert!(font.line_skip() >= font.height() - 1);
    }
}

#[test]
fn metrics_face_names() {
    let env = testenv!();
    let font = env.font(24);
    assert!(font.family_name().is_some_and(|name| !name.is_empty()));
    assert!(font.style_name().is_some());
    assert_eq!(font.face_count(), 1);
    assert!(!font.is_fixed_width());
}

#[test]
fn metrics_single_glyph_size() {
    let env = testenv!();
    let font = env.font(32);
    for ch in ['A', 'g', 'j', ' '] {
        let glyph = font.glyph_metrics(ch).unwrap();
        assert!(glyph.min_x <= glyph.max_x);
        assert!(glyph.min_y <= glyph.max_y);
        let size = font.size_text(Text::Glyph(ch)).unwrap();
        assert_eq!(
            size.width,
            glyph.max_x.max(glyph.advance) - glyph.min_x.min(0),
            "width of {ch:?}"
        );
        assert_eq!(size.height, font.height());
    }
}

#[test]
fn metrics_glyph_metric_matches_struct() {
    let env = testenv!();
    let font = env.font(24);
    let glyph = font.glyph_metrics('W').unwrap();
    assert_eq!(font.glyph_metric('W', GlyphMetric::MinX), Some(glyph.min_x));
    assert_eq!(font.glyph_metric('W', GlyphMetric::MaxX), Some(glyph.max_x));
    assert_eq!(font.glyph_metric('W', GlyphMetric::MinY), Some(glyph.min_y));
    assert_eq!(font.glyph_metric('W', GlyphMetric::MaxY), Some(glyph.max_y));
    assert_eq!(
        font.glyph_metric('W', GlyphMetric::Advance),
        Some(glyph.advance)
    );
}

#[test]
fn metrics_measure_empty_text() {
    let env = testenv!();
    let font = env.font(24);
    assert_eq!(font.size_text(Text::Utf8("")), None);
    assert_eq!(font.measure_text(Text::Latin1(b""), Dimension::Width), None);
}

#[test]
fn metrics_encodings_agree() {
    let env = testenv!();
    let font = env.font(24);
    // "Déjà vu" in ISO-8859-1, UTF-8 and UTF-16.
    let latin1 = Text::Latin1(b"D\xe9j\xe0 vu");
    let utf8 = Text::Utf8("Déjà vu");
    let utf16: Vec<u16> = "Déjà vu".encode_utf16().collect();
    let unicode = Text::Unicode(&utf16);
    let expected = font.size_text(utf8).unwrap();
    assert_eq!(font.size_text(latin1), Some(expected));
    assert_eq!(font.size_text(unicode), Some(expected));
}

#[test]
fn metrics_samples_measure_in_every_encoding() {
    let env = testenv!();
    let font = env.font(24);
    for sample in ttf_surface_dev::TextSamples::new().iter() {
        let text = sample.text.trim();
        assert!(
            text.chars().all(|ch| font.glyph_is_provided(ch)),
            "{} has unmapped characters",
            sample.name
        );
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let expected = font.size_text(Text::Utf8(text)).unwrap();
        assert_eq!(
            font.size_text(Text::Unicode(&utf16)),
            Some(expected),
            "{}",
            sample.name
        );
        let width: i32 = text
            .chars()
            .map(|ch| font.glyph_metric(ch, GlyphMetric::Advance).unwrap())
            .sum();
        assert!(expected.width >= width, "{}", sample.name);
    }
}

#[test]
fn metrics_width_grows_with_text() {
    let env = testenv!();
    let font = env.font(24);
    let samples = ttf_surface_dev::TextSamples::new();
    let short = font
        .measure_text(Text::Utf8(samples.ascii.text.trim()), Dimension::Width)
        .unwrap();
    let long = font
        .measure_text(Text::Utf8(samples.pangram.text.trim()), Dimension::Width)
        .unwrap();
    assert!(long > short);
    assert_eq!(
        font.measure_text(Text::Utf8(samples.pangram.text.trim()), Dimension::Height),
        Some(font.height())
    );
}

#[test]
fn metrics_scale_with_size() {
    let env = testenv!();
    let small = env.font(12);
    let large = env.font(48);
    assert!(large.height() > small.height());
    let text = Text::Utf8("Hello");
    assert!(
        large.measure_text(text, Dimension::Width) > small.measure_text(text, Dimension::Width)
    );
}
