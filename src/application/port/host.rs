// SPDX-License-Identifier: MPL-2.0
//! Host runtime port definitions.
//!
//! The host supplies two services: a blocking user-facing alert, and a
//! registry issuing revocable references to file payloads. Methods take
//! `&self` because the host is shared between the controller and the
//! references it hands out; implementations use interior mutability.

use crate::domain::media::SelectedFile;

/// Port for synchronous user-facing messages.
pub trait Alerter {
    /// Shows `message` to the user. Returns once the message is acknowledged.
    fn alert(&self, message: &str);
}

/// Port for issuing and revoking references to file payloads.
pub trait ObjectUrls {
    /// Issues a new reference bound to `file`'s payload.
    fn create_object_url(&self, file: &SelectedFile) -> String;

    /// Releases the resources behind `reference`.
    ///
    /// Must be a no-op for unknown or already revoked references.
    fn revoke_object_url(&self, reference: &str);
}

/// Everything the preview controller needs from its host runtime.
pub trait HostRuntime: Alerter + ObjectUrls {}

impl<T: Alerter + ObjectUrls> HostRuntime for T {}
