// SPDX-License-Identifier: MPL-2.0
//! Image preview use case.
//!
//! - [`PreviewController`]: handles selection and teardown events
//! - [`PreviewReference`]: revocable payload reference, released on drop

pub mod controller;
pub mod reference;

pub use controller::PreviewController;
pub use reference::PreviewReference;

use crate::domain::error::ValidationError;

/// Events a host delivers to the preview controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The file input's selection changed.
    SelectionChanged,
    /// The page is about to be discarded.
    PageTeardown,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new preview is shown under `reference`.
    Previewed { reference: String },
    /// The selection was empty; the preview was reset.
    Cleared,
    /// The selected file was refused; the user was alerted and the preview reset.
    Rejected(ValidationError),
    /// Teardown handled; the preview was reset and the controller detached.
    TornDown,
    /// The controller is detached and ignored the event.
    Detached,
}
