// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default largest accepted file size (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = crate::domain::preview::size_bounds::DEFAULT_BYTES;

/// Default media-type prefix a file must declare to be previewed.
pub const DEFAULT_ACCEPTED_TYPE_PREFIX: &str = crate::domain::media::IMAGE_TYPE_PREFIX;

/// Default container class toggled while an image is shown.
pub const DEFAULT_HAS_IMAGE_CLASS: &str = crate::domain::preview::DEFAULT_HAS_IMAGE_CLASS;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the command line, the config file nor the OS
/// selects an available one.
pub const DEFAULT_LOCALE: &str = "zh-TW";
