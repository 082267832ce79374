// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Item image references.
//!
//! Items only store the reference string. This module inspects local
//! image files so the front end can report on them.

use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// Basic facts about a local image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Short lowercase name of the format, e.g. `png`.
    pub fn format_name(&self) -> &'static str {
        self.format
            .and_then(|f| f.extensions_str().first().copied())
            .unwrap_or("unknown")
    }
}

/// Check whether the extension of `path` names a known image format.
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Read the header of the image at `path`, guessing the format from its
/// contents.
pub fn probe(path: &Path) -> Result<ImageInfo> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let format = reader.format();
    let (width, height) = reader
        .into_dimensions()
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    log::debug!("Probed image {}: {}x{} {:?}", path.display(), width, height, format);
    Ok(ImageInfo {
        format,
        width,
        height,
    })
}
