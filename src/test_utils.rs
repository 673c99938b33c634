// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the host ports.
//!
//! [`RecordingHost`] keeps every alert and every issued and revoked
//! reference so tests can assert on the controller's side effects.

use crate::application::port::{Alerter, ObjectUrls};
use crate::domain::media::SelectedFile;
use crate::infrastructure::ObjectUrlRegistry;
use std::cell::{Cell, RefCell};

pub use crate::infrastructure::HeadlessSurface as RecordingSurface;

/// Builds a file with a declared `size` and a small placeholder payload.
#[must_use]
pub fn file_of(media_type: &str, size: u64) -> SelectedFile {
    SelectedFile::with_declared_size("selected", media_type, size, vec![0u8; 16])
}

/// Host runtime that records alerts and reference lifecycles.
#[derive(Debug, Default)]
pub struct RecordingHost {
    registry: ObjectUrlRegistry,
    alerts: RefCell<Vec<String>>,
    created: Cell<usize>,
    revoked: RefCell<Vec<String>>,
    peak_live: Cell<usize>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alert messages, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Number of references issued.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Revoked references in revocation order, including no-op revokes.
    #[must_use]
    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    #[must_use]
    pub fn is_live(&self, reference: &str) -> bool {
        self.registry.is_live(reference)
    }

    /// Most references ever live at the same time.
    #[must_use]
    pub fn peak_live(&self) -> usize {
        self.peak_live.get()
    }
}

impl Alerter for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

impl ObjectUrls for RecordingHost {
    fn create_object_url(&self, file: &SelectedFile) -> String {
        let reference = self.registry.create_object_url(file);
        self.created.set(self.created.get() + 1);
        self.peak_live
            .set(self.peak_live.get().max(self.registry.live_count()));
        reference
    }

    fn revoke_object_url(&self, reference: &str) {
        self.registry.revoke_object_url(reference);
        self.revoked.borrow_mut().push(reference.to_string());
    }
}
