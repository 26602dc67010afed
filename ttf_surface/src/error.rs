// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

/// Error produced when a font cannot be opened.
///
/// Carries a non-exhaustive [`LoadErrorKind`] plus the resolved path of the
/// font file, when the font was requested from the file system.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    /// The non-exhaustive category describing this error.
    kind: LoadErrorKind,

    /// The resolved path of the font file, if any.
    path: Option<PathBuf>,

    /// Message reported by the component that failed.
    detail: Option<String>,
}

impl LoadError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// The resolved path of the font that failed to load.
    ///
    /// This is `None` for fonts opened from memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Additional detail from the failing component, if available.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub(crate) fn new(kind: LoadErrorKind, path: Option<&Path>) -> Self {
        Self {
            kind,
            path: path.map(Path::to_path_buf),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "couldn't load font `{}`: ", path.display())?,
            None => write!(f, "couldn't load font from memory: ")?,
        }
        match self.kind {
            LoadErrorKind::NotInitialized => write!(f, "library is not initialized")?,
            LoadErrorKind::InvalidSize => write!(
                f,
                "point size must be between 1 and {}",
                crate::Library::MAX_SIZE
            )?,
            LoadErrorKind::Io => write!(f, "file could not be read")?,
            LoadErrorKind::InvalidFont => write!(f, "not a valid font file")?,
            LoadErrorKind::FaceIndexOutOfRange => write!(f, "no face at the requested index")?,
        }
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

impl core::error::Error for LoadError {}

/// The non-exhaustive category of a [`LoadError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadErrorKind {
    /// [`Library::init`](crate::Library::init) has not been called.
    NotInitialized,

    /// The requested point size was zero or above
    /// [`Library::MAX_SIZE`](crate::Library::MAX_SIZE).
    InvalidSize,

    /// The font file could not be read.
    Io,

    /// The data is not a TrueType or OpenType font.
    InvalidFont,

    /// The font file has no face at the requested index.
    FaceIndexOutOfRange,
}
