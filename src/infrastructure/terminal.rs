// SPDX-License-Identifier: MPL-2.0
//! Host runtime for the command line.
//!
//! Alerts are written to a text stream (stderr by default) and payload
//! references are kept in an [`ObjectUrlRegistry`].

use super::object_urls::ObjectUrlRegistry;
use crate::application::port::{Alerter, ObjectUrls};
use crate::domain::media::SelectedFile;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

/// Terminal host: alerts to a stream, references in memory.
pub struct TerminalHost {
    registry: ObjectUrlRegistry,
    out: RefCell<Box<dyn Write>>,
}

impl TerminalHost {
    /// Host writing alerts to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Host writing alerts to `out`.
    #[must_use]
    pub fn with_writer(out: impl Write + 'static) -> Self {
        Self {
            registry: ObjectUrlRegistry::new(),
            out: RefCell::new(Box::new(out)),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }
}

impl fmt::Debug for TerminalHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalHost")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Alerter for TerminalHost {
    fn alert(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "[alert] {message}").and_then(|()| out.flush()) {
            tracing::warn!(%err, message, "failed to write alert");
        }
    }
}

impl ObjectUrls for TerminalHost {
    fn create_object_url(&self, file: &SelectedFile) -> String {
        self.registry.create_object_url(file)
    }

    fn revoke_object_url(&self, reference: &str) {
        self.registry.revoke_object_url(reference);
    }
}
