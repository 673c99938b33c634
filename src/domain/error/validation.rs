// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Reasons a selected file is refused for preview.
///
/// Both are user-facing: they are shown through the host's alert mechanism
/// and the preview is reset, after which the user may simply pick another file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Declared media type does not start with the accepted image prefix.
    InvalidMediaType {
        /// The media type the host reported.
        media_type: String,
    },

    /// File is larger than the configured limit.
    FileTooLarge {
        /// Declared size of the file in bytes.
        size: u64,
        /// Largest accepted size in bytes.
        limit: u64,
    },
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidMediaType { .. } => "error-invalid-media-type",
            ValidationError::FileTooLarge { .. } => "error-file-too-large",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidMediaType { media_type } if media_type.is_empty() => {
                write!(f, "Not an image: no media type declared")
            }
            ValidationError::InvalidMediaType { media_type } => {
                write!(f, "Not an image: {media_type}")
            }
            ValidationError::FileTooLarge { size, limit } => {
                write!(f, "File too large: {size} bytes (limit {limit} bytes)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
