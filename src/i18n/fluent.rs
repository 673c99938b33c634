// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed message catalogue.

use super::{resolve_locale, Asset};
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed as _;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded catalogue and picks the locale from the command
    /// line, the config, the OS, then the default, in that order.
    #[must_use]
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Self {
        let (bundles, available_locales) = load_bundles();
        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        tracing::debug!(locale = %current_locale, "message catalogue loaded");
        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    /// Loads the catalogues and selects `locale`, ignoring config and OS.
    ///
    /// Falls back to the default locale when `locale` is unavailable.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let mut i18n = Self::new(None, &Config::default());
        match locale.parse::<LanguageIdentifier>() {
            Ok(lang) if i18n.bundles.contains_key(&lang) => i18n.current_locale = lang,
            _ => i18n.current_locale = i18n.default_locale.clone(),
        }
        i18n
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Returns the message for `key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Returns the message for `key` with `args` substituted.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.format(&self.current_locale, key, args)
            .or_else(|| self.format(&self.default_locale, key, args))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::warn!(%locale, key, ?errors, "failed to format message");
            None
        }
    }
}

fn load_bundles() -> (
    HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    Vec<LanguageIdentifier>,
) {
    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale) = filename
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((_, errors)) => {
                tracing::warn!(filename, ?errors, "skipping unparseable catalogue");
                continue;
            }
        };

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Messages go to plain-text alerts; bidi isolation marks would show up verbatim.
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(filename, ?errors, "catalogue has conflicting messages");
        }
        bundles.insert(locale.clone(), bundle);
        available_locales.push(locale);
    }

    available_locales.sort_by_key(ToString::to_string);
    (bundles, available_locales)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogues_are_available() {
        let i18n = I18n::for_locale("zh-TW");
        let names: Vec<String> = i18n
            .available_locales()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["en-US".to_string(), "zh-TW".to_string()]);
    }

    #[test]
    fn traditional_chinese_messages() {
        let i18n = I18n::for_locale("zh-TW");
        assert_eq!(i18n.tr("error-invalid-media-type"), "請選擇圖片檔");
        assert_eq!(
            i18n.tr_with_args(
                "error-file-too-large",
                &[("limit", "5".to_string()), ("unit", "MB".to_string())]
            ),
            "圖片請小於 5MB"
        );
    }

    #[test]
    fn english_messages() {
        let i18n = I18n::for_locale("en-US");
        assert_eq!(i18n.tr("error-invalid-media-type"), "Please choose an image file");
        assert_eq!(
            i18n.tr_with_args(
                "error-file-too-large",
                &[("limit", "5".to_string()), ("unit", "MB".to_string())]
            ),
            "Image must be smaller than 5MB"
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let i18n = I18n::for_locale("fr");
        assert_eq!(i18n.current_locale().to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::for_locale("en-US");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
