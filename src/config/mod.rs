// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use preview_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Allow larger uploads
//! config.max_file_size_bytes = Some(10 * 1024 * 1024);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::preview::{MaxFileSize, PreviewOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PreviewLens";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub max_file_size_bytes: Option<u64>,
    #[serde(default)]
    pub accepted_type_prefix: Option<String>,
    #[serde(default)]
    pub has_image_class: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            max_file_size_bytes: Some(DEFAULT_MAX_FILE_SIZE_BYTES),
            accepted_type_prefix: Some(DEFAULT_ACCEPTED_TYPE_PREFIX.to_string()),
            has_image_class: Some(DEFAULT_HAS_IMAGE_CLASS.to_string()),
        }
    }
}

impl Config {
    /// Builds controller options, filling unset fields with defaults.
    #[must_use]
    pub fn preview_options(&self) -> PreviewOptions {
        let mut options = PreviewOptions::default();
        if let Some(bytes) = self.max_file_size_bytes {
            options = options.with_max_file_size(MaxFileSize::new(bytes));
        }
        if let Some(prefix) = self.accepted_type_prefix.as_deref().filter(|p| !p.is_empty()) {
            options = options.with_accepted_type_prefix(prefix);
        }
        if let Some(class) = self.has_image_class.as_deref().filter(|c| !c.is_empty()) {
            options = options.with_has_image_class(class);
        }
        options
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the user's config directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the user's config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`.
///
/// Unparseable content yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            language: Some("en-US".to_string()),
            max_file_size_bytes: Some(2 * 1024 * 1024),
            accepted_type_prefix: Some("image/".to_string()),
            has_image_class: Some("has-photo".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(load_from_path(&temp_dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn partial_file_leaves_other_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"zh-TW\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("zh-TW"));
        assert_eq!(loaded.max_file_size_bytes, None);
        assert_eq!(loaded.preview_options(), PreviewOptions::default());
    }

    #[test]
    fn preview_options_apply_and_clamp_settings() {
        let config = Config {
            language: None,
            max_file_size_bytes: Some(1),
            accepted_type_prefix: Some(String::new()),
            has_image_class: Some("has-photo".to_string()),
        };
        let options = config.preview_options();
        assert_eq!(options.max_file_size().bytes(), 1024);
        assert_eq!(options.accepted_type_prefix(), "image/");
        assert_eq!(options.has_image_class(), "has-photo");
    }

    #[test]
    fn default_config_matches_default_options() {
        assert_eq!(Config::default().preview_options(), PreviewOptions::default());
    }
}
