// SPDX-License-Identifier: MPL-2.0
//! The preview controller.
//!
//! Mediates selection → validation → preview reference → surface state for
//! one file input and one display surface. All handlers run synchronously
//! and never overlap; the only state carried between them is the current
//! [`PreviewReference`].

use super::reference::PreviewReference;
use super::{Event, Outcome};
use crate::application::port::{DisplaySurface, FileSelection, HostRuntime, ObjectUrls};
use crate::domain::error::ValidationError;
use crate::domain::media::SelectedFile;
use crate::domain::preview::{validate, PreviewOptions, SurfaceState};
use crate::i18n::I18n;
use std::rc::Rc;

/// Single-file image preview bound to a file input and a display surface.
///
/// At most one preview reference is live at any time: it is revoked before
/// a replacement is issued, on every reset, and when the controller is dropped.
pub struct PreviewController<S, D, H> {
    selection: S,
    surface: D,
    host: Rc<H>,
    i18n: I18n,
    options: PreviewOptions,
    current: Option<PreviewReference>,
    detached: bool,
}

impl<S, D, H> PreviewController<S, D, H>
where
    S: FileSelection,
    D: DisplaySurface,
    H: HostRuntime + 'static,
{
    /// Binds a controller to its UI handles.
    ///
    /// Returns `None` when either handle is missing, in which case nothing is
    /// bound and no events will be handled.
    #[must_use]
    pub fn attach(
        selection: Option<S>,
        surface: Option<D>,
        host: Rc<H>,
        i18n: I18n,
        options: PreviewOptions,
    ) -> Option<Self> {
        let (Some(selection), Some(surface)) = (selection, surface) else {
            tracing::debug!("image preview not attached: file input or display surface missing");
            return None;
        };

        Some(Self {
            selection,
            surface,
            host,
            i18n,
            options,
            current: None,
            detached: false,
        })
    }

    /// Dispatches a host event to its handler.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::SelectionChanged => self.on_selection_changed(),
            Event::PageTeardown => self.on_page_teardown(),
        }
    }

    /// Handles a change of the file input's selection.
    pub fn on_selection_changed(&mut self) -> Outcome {
        if self.detached {
            tracing::debug!("selection change after teardown ignored");
            return Outcome::Detached;
        }

        let mut files = self.selection.selected_files().into_iter();
        let Some(file) = files.next() else {
            self.reset();
            return Outcome::Cleared;
        };

        let ignored = files.count();
        if ignored > 0 {
            tracing::debug!(ignored, "only the first selected file is previewed");
        }

        if let Err(err) = validate(&file, &self.options) {
            tracing::info!(
                file = file.name(),
                media_type = file.media_type(),
                size = file.size(),
                %err,
                "selection rejected"
            );
            self.host.alert(&self.message_for(&err));
            self.reset();
            return Outcome::Rejected(err);
        }

        self.show(&file)
    }

    /// Clears the preview and releases the current reference, if any.
    ///
    /// Calling this repeatedly has the same effect as calling it once.
    pub fn reset(&mut self) {
        if let Some(reference) = self.current.take() {
            reference.revoke();
        }
        self.surface.clear_source();
        self.surface
            .remove_container_class(self.options.has_image_class());
    }

    /// Handles the host's page-teardown signal.
    ///
    /// Resets the preview and detaches the controller; later events are ignored.
    pub fn on_page_teardown(&mut self) -> Outcome {
        if self.detached {
            return Outcome::Detached;
        }
        self.reset();
        self.detached = true;
        tracing::debug!("image preview detached");
        Outcome::TornDown
    }

    /// Returns whether the surface currently shows an image.
    #[must_use]
    pub fn surface_state(&self) -> SurfaceState {
        if self.current.is_some() {
            SurfaceState::HasImage
        } else {
            SurfaceState::Empty
        }
    }

    /// Returns the live preview reference, if any.
    #[must_use]
    pub fn current_reference(&self) -> Option<&str> {
        self.current.as_ref().map(PreviewReference::as_str)
    }

    /// Returns `true` once page teardown has been handled.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[must_use]
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Gives the host mutable access to the file input, e.g. to change its
    /// selection before raising [`Event::SelectionChanged`].
    pub fn selection_mut(&mut self) -> &mut S {
        &mut self.selection
    }

    fn show(&mut self, file: &SelectedFile) -> Outcome {
        // Revoke first: two references must never be live together.
        if let Some(previous) = self.current.take() {
            previous.revoke();
        }

        let registry: Rc<dyn ObjectUrls> = Rc::clone(&self.host) as Rc<dyn ObjectUrls>;
        let reference = PreviewReference::create(registry, file);
        self.surface.set_source(reference.as_str());
        self.surface
            .add_container_class(self.options.has_image_class());

        let outcome = Outcome::Previewed {
            reference: reference.as_str().to_string(),
        };
        self.current = Some(reference);
        outcome
    }

    fn message_for(&self, err: &ValidationError) -> String {
        match err {
            ValidationError::InvalidMediaType { .. } => self.i18n.tr(err.i18n_key()),
            ValidationError::FileTooLarge { .. } => {
                let (limit, unit) = self.options.max_file_size().display_parts();
                self.i18n.tr_with_args(
                    err.i18n_key(),
                    &[("limit", limit), ("unit", unit.to_string())],
                )
            }
        }
    }
}
