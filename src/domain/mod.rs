// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`ValidationError`](error::ValidationError))
//! - [`media`]: Media types ([`MediaType`](media::MediaType), [`SelectedFile`](media::SelectedFile))
//! - [`preview`]: Preview rules ([`MaxFileSize`](preview::MaxFileSize),
//!   [`PreviewOptions`](preview::PreviewOptions), [`validate`](preview::validate))

pub mod error;
pub mod media;
pub mod preview;
