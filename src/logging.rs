// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for the command-line host.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to binaries. Output goes to stderr so it never mixes with the report on
//! stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "preview_lens=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`],
/// or to `preview_lens=debug` when `verbose` is set.
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "preview_lens=debug"
    } else {
        DEFAULT_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok()
}
