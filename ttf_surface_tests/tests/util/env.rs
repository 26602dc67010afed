// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use ttf_surface::{Font, Library, Surface};

fn is_save_mode() -> bool {
    std::env::var("TTF_SURFACE_TEST")
        .map(|x| x.eq_ignore_ascii_case("save"))
        .unwrap_or(false)
}

fn current_imgs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("current")
}

/// An initialized library plus the font every test renders with.
///
/// The font is the bundled DejaVu Sans, or the file named by
/// `TTF_SURFACE_TEST_FONT`.
pub(crate) struct TestEnv {
    test_name: String,
    font_path: PathBuf,
    library: Library,
}

impl TestEnv {
    pub(crate) fn new(test_name: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            font_path: ttf_surface_dev::test_font(),
            library: Library::initialized(),
        }
    }

    pub(crate) fn library(&self) -> &Library {
        &self.library
    }

    pub(crate) fn font_path(&self) -> &Path {
        &self.font_path
    }

    /// Opens the test font at `size`.
    pub(crate) fn font(&self, size: u32) -> Font<'_> {
        self.library
            .open_font(&self.font_path, size, None)
            .unwrap_or_else(|err| panic!("{}: {err}", self.test_name))
    }

    /// Writes `surface` to `tests/current` when `TTF_SURFACE_TEST=save`.
    pub(crate) fn save(&self, case: &str, surface: &Surface) {
        if !is_save_mode() {
            return;
        }
        let dir = current_imgs_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}-{case}.png", self.test_name));
        surface.save_png(&path).unwrap();
    }
}
