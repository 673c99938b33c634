// SPDX-License-Identifier: MPL-2.0
//! Scoped, revocable preview references.

use crate::application::port::ObjectUrls;
use crate::domain::media::SelectedFile;
use std::fmt;
use std::rc::Rc;

/// A live reference to a file payload, issued by the host's [`ObjectUrls`].
///
/// The reference is revoked exactly once, when the value is dropped. Holding
/// previews in an `Option<PreviewReference>` therefore makes "replace" and
/// "clear" release the previous reference without any call-site bookkeeping.
pub struct PreviewReference {
    url: String,
    registry: Rc<dyn ObjectUrls>,
}

impl PreviewReference {
    /// Issues a new reference for `file` from `registry`.
    #[must_use]
    pub fn create(registry: Rc<dyn ObjectUrls>, file: &SelectedFile) -> Self {
        let url = registry.create_object_url(file);
        tracing::debug!(reference = %url, file = file.name(), "preview reference created");
        Self { url, registry }
    }

    /// Returns the reference string to bind as an image source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Revokes the reference now.
    pub fn revoke(self) {
        drop(self);
    }
}

impl Drop for PreviewReference {
    fn drop(&mut self) {
        self.registry.revoke_object_url(&self.url);
        tracing::debug!(reference = %self.url, "preview reference revoked");
    }
}

impl fmt::Debug for PreviewReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewReference").field(&self.url).finish()
    }
}

impl fmt::Display for PreviewReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
