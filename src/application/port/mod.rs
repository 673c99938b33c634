// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete UI toolkits.
//!
//! # Available Ports
//!
//! - [`selection`]: The file-selection control
//! - [`surface`]: The display surface showing the preview
//! - [`host`]: Alerts and revocable payload references
//!
//! # Design Notes
//!
//! - Ports are single-threaded: hosts deliver events one at a time
//! - Host services take `&self` so they can be shared through `Rc`
//!
//! # Example
//!
//! ```ignore
//! use preview_lens::application::port::{Alerter, ObjectUrls};
//!
//! struct BrowserHost { /* ... */ }
//! impl Alerter for BrowserHost { /* ... */ }
//! impl ObjectUrls for BrowserHost { /* ... */ }
//! ```

pub mod host;
pub mod selection;
pub mod surface;

pub use host::{Alerter, HostRuntime, ObjectUrls};
pub use selection::FileSelection;
pub use surface::DisplaySurface;
