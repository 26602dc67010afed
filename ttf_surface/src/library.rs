// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Library state and font loading.

use core::cell::Cell;
use std::path::{Path, PathBuf};

use peniko::{Blob, FontData};
use skrifa::FontRef;
use skrifa::raw::FileRef;

use crate::error::{LoadError, LoadErrorKind};
use crate::font::Font;
use crate::metrics::FontMetrics;

/// Options for opening a font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenOptions {
    /// Point size, rendered at 72 DPI so that one point is one pixel.
    ///
    /// Must be in `1..=Library::MAX_SIZE`. The default value is 12.
    pub size: u32,
    /// Index of the face inside a font collection.
    ///
    /// The default value is 0.
    pub index: u32,
    /// Directory the file name is resolved against.
    ///
    /// The default value is `None`, which leaves the file name untouched.
    pub search_dir: Option<PathBuf>,
}

impl OpenOptions {
    /// Creates options for `size` with the remaining fields at their defaults.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            size: 12,
            index: 0,
            search_dir: None,
        }
    }
}

/// Entry point of the crate: tracks initialization and opens fonts.
///
/// Every [`Font`] borrows the library that opened it, so fonts are always
/// closed before the library can be shut down or dropped.
#[derive(Debug, Default)]
pub struct Library {
    initialized: bool,
    open_fonts: Cell<usize>,
}

impl Library {
    /// Largest point size a font can be opened at.
    pub const MAX_SIZE: u32 = 16_384;

    /// Creates an uninitialized library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and initializes a library.
    pub fn initialized() -> Self {
        let mut library = Self::new();
        library.init();
        library
    }

    /// Initializes the library.
    ///
    /// Returns `true` once the library is ready, including when it was
    /// already initialized.
    pub fn init(&mut self) -> bool {
        if !self.initialized {
            log::debug!("initializing font library");
            self.initialized = true;
        }
        self.initialized
    }

    /// Shuts the library down. Does nothing if it is not initialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        if self.open_fonts.get() != 0 {
            log::warn!(
                "shutting down with {} fonts never closed",
                self.open_fonts.get()
            );
        }
        log::debug!("shutting down font library");
        self.initialized = false;
    }

    /// Returns `true` between [`Library::init`] and [`Library::shutdown`].
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of fonts opened by this library that have not been closed.
    pub fn open_fonts(&self) -> usize {
        self.open_fonts.get()
    }

    /// Opens `filename` at `size` points.
    ///
    /// When `dir` is given, `filename` is resolved against it.
    pub fn open_font(
        &self,
        filename: impl AsRef<Path>,
        size: u32,
        dir: Option<&Path>,
    ) -> Result<Font<'_>, LoadError> {
        let options = OpenOptions {
            size,
            search_dir: dir.map(Path::to_path_buf),
            ..OpenOptions::default()
        };
        self.open_font_with(filename, &options)
    }

    /// Opens `filename` with the given options.
    pub fn open_font_with(
        &self,
        filename: impl AsRef<Path>,
        options: &OpenOptions,
    ) -> Result<Font<'_>, LoadError> {
        let path = resolve_path(filename.as_ref(), options.search_dir.as_deref());
        let fail = |kind| LoadError::new(kind, Some(&path));
        if !self.initialized {
            return Err(fail(LoadErrorKind::NotInitialized));
        }
        if !valid_size(options.size) {
            return Err(fail(LoadErrorKind::InvalidSize));
        }
        let bytes =
            std::fs::read(&path).map_err(|err| fail(LoadErrorKind::Io).with_detail(err))?;
        self.open_blob(Blob::from(bytes), options.size, options.index, Some(&path))
    }

    /// Opens a font from bytes already in memory.
    pub fn open_font_from_memory(
        &self,
        data: impl Into<Blob<u8>>,
        size: u32,
        index: u32,
    ) -> Result<Font<'_>, LoadError> {
        if !self.initialized {
            return Err(LoadError::new(LoadErrorKind::NotInitialized, None));
        }
        if !valid_size(size) {
            return Err(LoadError::new(LoadErrorKind::InvalidSize, None));
        }
        self.open_blob(data.into(), size, index, None)
    }

    /// Opens `filename`, passes the font to `f` and closes it again.
    ///
    /// The font is closed on every exit path of `f`, including unwinding.
    pub fn with_font<R>(
        &self,
        filename: impl AsRef<Path>,
        options: &OpenOptions,
        f: impl FnOnce(&mut Font<'_>) -> R,
    ) -> Result<R, LoadError> {
        let mut font = self.open_font_with(filename, options)?;
        Ok(f(&mut font))
    }

    fn open_blob(
        &self,
        blob: Blob<u8>,
        size: u32,
        index: u32,
        path: Option<&Path>,
    ) -> Result<Font<'_>, LoadError> {
        let fail = |kind| LoadError::new(kind, path);
        let face_count = match FileRef::new(blob.data())
            .map_err(|err| fail(LoadErrorKind::InvalidFont).with_detail(err))?
        {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };
        if index >= face_count {
            return Err(fail(LoadErrorKind::FaceIndexOutOfRange)
                .with_detail(format_args!("{index} >= {face_count}")));
        }
        let size = size as f32;
        let metrics = {
            let font = FontRef::from_index(blob.data(), index)
                .map_err(|err| fail(LoadErrorKind::InvalidFont).with_detail(err))?;
            FontMetrics::new(&font, size, face_count)
        };
        log::debug!(
            "opened font {:?} face {index} at {size} px",
            path.unwrap_or(Path::new("<memory>"))
        );
        self.open_fonts.set(self.open_fonts.get() + 1);
        Ok(Font::new(self, FontData::new(blob, index), size, metrics))
    }

    pub(crate) fn font_closed(&self) {
        debug_assert!(self.open_fonts.get() > 0, "closed more fonts than opened");
        self.open_fonts.set(self.open_fonts.get().saturating_sub(1));
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn valid_size(size: u32) -> bool {
    (1..=Library::MAX_SIZE).contains(&size)
}

/// Joins `filename` onto `dir` when a directory is given.
pub fn resolve_path(filename: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(filename),
        None => filename.to_path_buf(),
    }
}
