// SPDX-License-Identifier: MPL-2.0
//! In-memory registry of revocable payload references.
//!
//! Mirrors what a browser does for object URLs: each call to
//! [`ObjectUrls::create_object_url`] pins the payload under a fresh
//! `blob:` reference until it is revoked.

use crate::application::port::ObjectUrls;
use crate::domain::media::SelectedFile;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

/// Prefix of every reference issued by [`ObjectUrlRegistry`].
pub const REFERENCE_PREFIX: &str = "blob:preview-lens/";

/// Single-threaded registry mapping issued references to payloads.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    next_id: Cell<u64>,
    entries: RefCell<HashMap<String, Arc<[u8]>>>,
}

impl ObjectUrlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload behind a live reference.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<Arc<[u8]>> {
        self.entries.borrow().get(reference).map(Arc::clone)
    }

    #[must_use]
    pub fn is_live(&self, reference: &str) -> bool {
        self.entries.borrow().contains_key(reference)
    }

    /// Number of references issued and not yet revoked.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Total payload bytes pinned by live references.
    #[must_use]
    pub fn pinned_bytes(&self) -> usize {
        self.entries.borrow().values().map(|payload| payload.len()).sum()
    }
}

impl ObjectUrls for ObjectUrlRegistry {
    fn create_object_url(&self, file: &SelectedFile) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let reference = format!("{REFERENCE_PREFIX}{id}");
        self.entries
            .borrow_mut()
            .insert(reference.clone(), file.payload_arc());
        reference
    }

    fn revoke_object_url(&self, reference: &str) {
        if self.entries.borrow_mut().remove(reference).is_none() {
            tracing::trace!(reference, "revoke of unknown reference ignored");
        }
    }
}
