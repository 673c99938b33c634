// SPDX-License-Identifier: MPL-2.0
//! Preview domain types: limits, options, surface state and validation.

pub mod newtypes;
pub mod validation;

pub use newtypes::{size_bounds, MaxFileSize};
pub use validation::validate;

use crate::domain::media::IMAGE_TYPE_PREFIX;

/// Presentation class added to the surface container while an image is shown.
pub const DEFAULT_HAS_IMAGE_CLASS: &str = "preview--has-img";

/// Whether the display surface currently shows an image.
///
/// Always derived from whether a preview reference is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    /// Nothing bound; the surface shows its placeholder.
    #[default]
    Empty,
    /// A preview reference is bound as the surface source.
    HasImage,
}

/// Settings the preview controller validates and renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    max_file_size: MaxFileSize,
    accepted_type_prefix: String,
    has_image_class: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_file_size: MaxFileSize::default(),
            accepted_type_prefix: IMAGE_TYPE_PREFIX.to_string(),
            has_image_class: DEFAULT_HAS_IMAGE_CLASS.to_string(),
        }
    }
}

impl PreviewOptions {
    /// Sets the largest accepted file size.
    #[must_use]
    pub fn with_max_file_size(mut self, max: MaxFileSize) -> Self {
        self.max_file_size = max;
        self
    }

    /// Sets the media-type prefix a file must declare.
    #[must_use]
    pub fn with_accepted_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.accepted_type_prefix = prefix.into();
        self
    }

    /// Sets the container class toggled while an image is shown.
    #[must_use]
    pub fn with_has_image_class(mut self, class: impl Into<String>) -> Self {
        self.has_image_class = class.into();
        self
    }

    #[must_use]
    pub fn max_file_size(&self) -> MaxFileSize {
        self.max_file_size
    }

    #[must_use]
    pub fn accepted_type_prefix(&self) -> &str {
        &self.accepted_type_prefix
    }

    #[must_use]
    pub fn has_image_class(&self) -> &str {
        &self.has_image_class
    }
}
