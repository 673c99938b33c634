// SPDX-License-Identifier: MPL-2.0
//! Preview newtypes.
//!
//! Type-safe wrappers for preview settings, ensuring they are always
//! within valid ranges.

// =============================================================================
// Size Bounds
// =============================================================================

/// File size bounds for previews.
pub mod size_bounds {
    /// One kibibyte in bytes.
    pub const KIB: u64 = 1024;
    /// One mebibyte in bytes.
    pub const MIB: u64 = 1024 * KIB;
    /// Smallest configurable limit (1 KiB).
    pub const MIN_BYTES: u64 = KIB;
    /// Largest configurable limit (100 MiB).
    pub const MAX_BYTES: u64 = 100 * MIB;
    /// Default limit (5 MiB).
    pub const DEFAULT_BYTES: u64 = 5 * MIB;
}

// =============================================================================
// MaxFileSize
// =============================================================================

/// Largest file size accepted for preview, in bytes (1 KiB–100 MiB).
///
/// A file whose size equals the limit is accepted; one byte more is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxFileSize(u64);

impl MaxFileSize {
    /// Creates a new limit, clamping the value to the valid range.
    #[must_use]
    pub fn new(bytes: u64) -> Self {
        Self(bytes.clamp(size_bounds::MIN_BYTES, size_bounds::MAX_BYTES))
    }

    /// Returns the limit in bytes.
    #[must_use]
    pub fn bytes(self) -> u64 {
        self.0
    }

    /// Returns whether a file of `size` bytes exceeds the limit.
    #[must_use]
    pub fn is_exceeded_by(self, size: u64) -> bool {
        size > self.0
    }

    /// Formats the limit for user-facing messages as a number and a unit.
    ///
    /// Limits of at least 1 MiB are given in `MB`, smaller ones in `KB`, so
    /// the number never rounds down to zero. Whole values print without
    /// decimals (`5`), others with up to two (`1.25`).
    #[must_use]
    pub fn display_parts(self) -> (String, &'static str) {
        if self.0 >= size_bounds::MIB {
            (format_units(self.0, size_bounds::MIB), "MB")
        } else {
            (format_units(self.0, size_bounds::KIB), "KB")
        }
    }
}

fn format_units(bytes: u64, unit: u64) -> String {
    if bytes % unit == 0 {
        return (bytes / unit).to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / unit as f64;
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl Default for MaxFileSize {
    fn default() -> Self {
        Self(size_bounds::DEFAULT_BYTES)
    }
}
