// SPDX-License-Identifier: MPL-2.0
//! Display surface that keeps its state in memory.
//!
//! Used by the command-line host, which reports the surface state after each
//! event instead of drawing it, and by tests.

use crate::application::port::DisplaySurface;
use std::collections::BTreeSet;

/// In-memory display surface: a source slot plus container classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSurface {
    source: Option<String>,
    container_classes: BTreeSet<String>,
}

impl HeadlessSurface {
    /// Returns the bound source reference, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.container_classes.contains(class)
    }

    /// Container classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.container_classes.iter().map(String::as_str)
    }
}

impl DisplaySurface for HeadlessSurface {
    fn set_source(&mut self, reference: &str) {
        self.source = Some(reference.to_string());
    }

    fn clear_source(&mut self) {
        self.source = None;
    }

    fn add_container_class(&mut self, class: &str) {
        self.container_classes.insert(class.to_string());
    }

    fn remove_container_class(&mut self, class: &str) {
        self.container_classes.remove(class);
    }
}
