// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # ttf_surface Dev
//!
//! This crate provides utilities for developing ttf_surface: a bundled
//! TrueType font and a few text samples.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the font used by tests and demos.
pub const TEST_FONT_ENV: &str = "TTF_SURFACE_TEST_FONT";

/// The directories that contain the bundled font files.
pub fn font_dirs() -> impl Iterator<Item = PathBuf> {
    let assets_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    [assets_dir.join("dejavu_fonts")].into_iter()
}

/// Returns the path of the TrueType font used by tests.
///
/// This is the bundled DejaVu Sans unless [`TEST_FONT_ENV`] names another
/// file. The override is returned as is, so a wrong path fails loudly when
/// the font is opened.
pub fn test_font() -> PathBuf {
    match std::env::var_os(TEST_FONT_ENV) {
        Some(path) => PathBuf::from(path),
        None => font_dirs()
            .map(|dir| dir.join("DejaVuSans.ttf"))
            .find(|path| path.is_file())
            .unwrap_or_else(|| PathBuf::from("DejaVuSans.ttf")),
    }
}

/// Directory that rendered test and demo images are written to.
pub fn output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or(Path::new(env!("CARGO_MANIFEST_DIR")))
        .join("_output")
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// Plain ASCII text.
    pub ascii: Sample,
    /// Latin text with accented characters.
    pub latin: Sample,
    /// A pangram covering every ASCII letter.
    pub pangram: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        let ascii = include_str!("../assets/text_samples/ascii.txt");
        let latin = include_str!("../assets/text_samples/latin.txt");
        let pangram = include_str!("../assets/text_samples/pangram.txt");
        Self {
            ascii: Sample {
                name: "ascii",
                text: ascii,
            },
            latin: Sample {
                name: "latin",
                text: latin,
            },
            pangram: Sample {
                name: "pangram",
                text: pangram,
            },
        }
    }

    /// Iterates over all samples.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        [&self.ascii, &self.latin, &self.pangram].into_iter()
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
