// SPDX-License-Identifier: MPL-2.0
//! Selection validation rules.

use super::PreviewOptions;
use crate::domain::error::ValidationError;
use crate::domain::media::{MediaType, SelectedFile};

/// Checks whether `file` may be previewed under `options`.
///
/// The media type is checked before the size: a file that is not an image
/// is reported as such even when it is also too large, since some hosts do
/// not report a meaningful size for non-image selections.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMediaType`] when the declared type does
/// not start with the accepted prefix, and [`ValidationError::FileTooLarge`]
/// when the declared size exceeds the limit.
pub fn validate(file: &SelectedFile, options: &PreviewOptions) -> Result<(), ValidationError> {
    if MediaType::classify_with_prefix(file.media_type(), options.accepted_type_prefix())
        != MediaType::Image
    {
        return Err(ValidationError::InvalidMediaType {
            media_type: file.media_type().to_string(),
        });
    }

    let limit = options.max_file_size();
    if limit.is_exceeded_by(file.size()) {
        return Err(ValidationError::FileTooLarge {
            size: file.size(),
            limit: limit.bytes(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preview::MaxFileSize;

    fn file(media_type: &str, size: u64) -> SelectedFile {
        SelectedFile::with_declared_size("f", media_type, size, Vec::<u8>::new())
    }

    #[test]
    fn accepts_small_image() {
        let options = PreviewOptions::default();
        assert_eq!(validate(&file("image/jpeg", 1_048_576), &options), Ok(()));
    }

    #[test]
    fn rejects_non_image() {
        let options = PreviewOptions::default();
        assert_eq!(
            validate(&file("text/plain", 100), &options),
            Err(ValidationError::InvalidMediaType {
                media_type: "text/plain".into()
            })
        );
    }

    #[test]
    fn rejects_oversized_image() {
        let options = PreviewOptions::default();
        assert_eq!(
            validate(&file("image/png", 6_291_456), &options),
            Err(ValidationError::FileTooLarge {
                size: 6_291_456,
                limit: 5_242_880
            })
        );
    }

    #[test]
    fn size_boundary_is_inclusive() {
        let options = PreviewOptions::default();
        assert!(validate(&file("image/png", 5_242_880), &options).is_ok());
        assert!(matches!(
            validate(&file("image/png", 5_242_881), &options),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn type_is_checked_before_size() {
        let options = PreviewOptions::default();
        assert!(matches!(
            validate(&file("application/zip", u64::MAX), &options),
            Err(ValidationError::InvalidMediaType { .. })
        ));
    }

    #[test]
    fn honours_custom_limit_and_prefix() {
        let options = PreviewOptions::default()
            .with_max_file_size(MaxFileSize::new(4096))
            .with_accepted_type_prefix("image/png");
        assert!(validate(&file("image/png", 4096), &options).is_ok());
        assert!(validate(&file("image/png", 4097), &options).is_err());
        assert!(validate(&file("image/jpeg", 10), &options).is_err());
    }
}
