// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::sync::Arc;

/// Media-type prefix shared by every image format (`image/png`, `image/jpeg`, ...).
pub const IMAGE_TYPE_PREFIX: &str = "image/";

/// Broad classification of a declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Any `image/*` type.
    Image,
    /// Everything else, including an empty declaration.
    Other,
}

impl MediaType {
    /// Classifies a declared media-type string.
    ///
    /// The comparison is case-sensitive, as browsers report lowercase types.
    #[must_use]
    pub fn classify(declared: &str) -> Self {
        Self::classify_with_prefix(declared, IMAGE_TYPE_PREFIX)
    }

    /// Classifies a declared media-type string against a custom prefix.
    #[must_use]
    pub fn classify_with_prefix(declared: &str, prefix: &str) -> Self {
        if declared.starts_with(prefix) {
            MediaType::Image
        } else {
            MediaType::Other
        }
    }
}

/// A file chosen by the user through a file-selection control.
///
/// The control owns the selection; the preview controller only inspects a
/// `SelectedFile` for the duration of one selection event. The payload is
/// shared so that cloning a selection never copies file contents.
///
/// # Example
///
/// ```
/// use preview_lens::domain::media::{MediaType, SelectedFile};
///
/// let file = SelectedFile::new("leaf.png", "image/png", vec![0u8; 16]);
///
/// assert_eq!(file.size(), 16);
/// assert_eq!(MediaType::classify(file.media_type()), MediaType::Image);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    size: u64,
    payload: Arc<[u8]>,
}

impl SelectedFile {
    /// Creates a file whose declared size is the payload length.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        payload: impl Into<Arc<[u8]>>,
    ) -> Self {
        let payload = payload.into();
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: payload.len() as u64,
            payload,
        }
    }

    /// Creates a file with an explicitly declared size.
    ///
    /// Hosts report size separately from the payload (a browser `File` knows
    /// its size before any bytes are read), so the two are allowed to differ.
    #[must_use]
    pub fn with_declared_size(
        name: impl Into<String>,
        media_type: impl Into<String>,
        size: u64,
        payload: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            payload: payload.into(),
        }
    }

    /// Returns the file name as reported by the host.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared media type (e.g. `image/png`).
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the declared size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the raw file contents.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the shared reference to the file contents.
    #[must_use]
    pub fn payload_arc(&self) -> Arc<[u8]> {
        Arc::clone(&self.payload)
    }
}

// Payloads can be megabytes; keep them out of debug output.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_accepts_image_types() {
        assert_eq!(MediaType::classify("image/png"), MediaType::Image);
        assert_eq!(MediaType::classify("image/jpeg"), MediaType::Image);
        assert_eq!(MediaType::classify("image/svg+xml"), MediaType::Image);
    }

    #[test]
    fn classify_rejects_other_types() {
        assert_eq!(MediaType::classify("text/plain"), MediaType::Other);
        assert_eq!(MediaType::classify("video/mp4"), MediaType::Other);
        assert_eq!(MediaType::classify(""), MediaType::Other);
        assert_eq!(MediaType::classify("image"), MediaType::Other);
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(MediaType::classify("IMAGE/PNG"), MediaType::Other);
    }

    #[test]
    fn classify_with_custom_prefix() {
        assert_eq!(
            MediaType::classify_with_prefix("image/png", "image/p"),
            MediaType::Image
        );
        assert_eq!(
            MediaType::classify_with_prefix("image/jpeg", "image/p"),
            MediaType::Other
        );
    }

    #[test]
    fn new_file_uses_payload_length_as_size() {
        let file = SelectedFile::new("a.png", "image/png", vec![1u8, 2, 3]);
        assert_eq!(file.size(), 3);
        assert_eq!(file.payload(), &[1, 2, 3]);
        assert_eq!(file.name(), "a.png");
    }

    #[test]
    fn declared_size_may_differ_from_payload() {
        let file = SelectedFile::with_declared_size("big.png", "image/png", 6 << 20, vec![0u8; 4]);
        assert_eq!(file.size(), 6 * 1024 * 1024);
        assert_eq!(file.payload().len(), 4);
    }

    #[test]
    fn clones_share_payload() {
        let file = SelectedFile::new("a.png", "image/png", vec![0u8; 8]);
        let copy = file.clone();
        assert!(Arc::ptr_eq(&file.payload_arc(), &copy.payload_arc()));
    }

    #[test]
    fn debug_output_omits_payload() {
        let file = SelectedFile::new("a.png", "image/png", vec![42u8; 8]);
        let debug = format!("{file:?}");
        assert!(debug.contains("a.png"));
        assert!(!debug.contains("42"));
    }
}
