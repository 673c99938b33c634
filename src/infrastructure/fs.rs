// SPDX-License-Identifier: MPL-2.0
//! Builds [`SelectedFile`]s from files on disk.
//!
//! The declared media type is sniffed from the file's leading bytes with the
//! `image` crate, falling back to the extension, then to
//! `application/octet-stream`.

use crate::domain::media::SelectedFile;
use crate::error::Result;
use image_rs::ImageFormat;
use std::fs;
use std::path::Path;

/// Media type reported for content that is not a recognised image.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Reads `path` into a [`SelectedFile`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_selected_file<P: AsRef<Path>>(path: P) -> Result<SelectedFile> {
    let path = path.as_ref();
    let payload = fs::read(path)?;
    let media_type = sniff_media_type(&payload, path);
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    tracing::debug!(file = %path.display(), media_type, size = payload.len(), "file loaded");
    Ok(SelectedFile::new(name, media_type, payload))
}

/// Determines the media type of `bytes`, using `path`'s extension as a hint.
#[must_use]
pub fn sniff_media_type(bytes: &[u8], path: &Path) -> &'static str {
    image_rs::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map_or(UNKNOWN_MEDIA_TYPE, |format| format.to_mime_type())
}
