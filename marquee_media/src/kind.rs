// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media kind classification and the immutable media item record.
//!
//! Kind is derived from the file extension of the source path, never stored
//! explicitly, so project data stays a plain list of paths.

/// Kind of a media element, derived from its source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video with decodable frames.
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["webp", "heic", "gif", "avif", "jpeg", "jpg", "png"];
const VIDEO_EXTENSIONS: &[&str] = &["mov", "mp4", "webm", "m4v"];

impl MediaKind {
    /// Classifies a source path by its extension, case-insensitively.
    ///
    /// Returns `None` for empty paths and unrecognized extensions.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        if ext.is_empty() || ext.contains('/') {
            return None;
        }
        let matches = |list: &[&str]| list.iter().any(|e| ext.eq_ignore_ascii_case(e));
        if matches(IMAGE_EXTENSIONS) {
            Some(Self::Image)
        } else if matches(VIDEO_EXTENSIONS) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// One media entry of a project, immutable once supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Source URL or path of the asset.
    pub src: String,
    /// Optional display title.
    pub title: Option<String>,
    /// Optional description text.
    pub description: Option<String>,
}

impl MediaItem {
    /// Creates an item with only a source path.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: None,
            description: None,
        }
    }

    /// Returns the media kind derived from the source path's extension.
    #[must_use]
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_path(&self.src)
    }
}
