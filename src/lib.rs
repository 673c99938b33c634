// SPDX-License-Identifier: MPL-2.0
//! `preview_lens` is a single-file image preview controller.
//!
//! It listens for file selections, checks that the chosen file is an image
//! under the size limit, shows it through a revocable preview reference, and
//! releases that reference on reset or page teardown. Hosts plug in through
//! the traits in [`application::port`]; [`infrastructure`] provides a
//! terminal host used by the `preview_lens` binary.

#![doc(html_root_url = "https://docs.rs/preview_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use application::preview::{Event, Outcome, PreviewController, PreviewReference};
pub use domain::preview::{PreviewOptions, SurfaceState};
