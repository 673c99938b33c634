// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`object_urls`]: In-memory revocable references (implements [`ObjectUrls`])
//! - [`terminal`]: Command-line host runtime (implements [`HostRuntime`])
//! - [`headless`]: In-memory display surface (implements [`DisplaySurface`])
//! - [`fs`]: Loads selected files from disk
//!
//! [`ObjectUrls`]: crate::application::port::ObjectUrls
//! [`HostRuntime`]: crate::application::port::HostRuntime
//! [`DisplaySurface`]: crate::application::port::DisplaySurface

pub mod fs;
pub mod headless;
pub mod object_urls;
pub mod terminal;

pub use headless::HeadlessSurface;
pub use object_urls::ObjectUrlRegistry;
pub use terminal::TerminalHost;
