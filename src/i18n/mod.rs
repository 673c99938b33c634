// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for user-facing messages.
//!
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded in
//! the binary. Traditional Chinese (`zh-TW`) is the default.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to the default locale when a message is missing

pub mod fluent;

pub use fluent::I18n;

use crate::config::Config;
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Picks the first available locale from the CLI, the config, then the OS.
fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |lang_str: &str| {
        lang_str
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.and_then(pick) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}
