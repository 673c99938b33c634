// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors raised outside the preview event handlers: configuration, locale
/// selection and file access.
///
/// Validation failures are not errors at this level; they are reported to
/// the user and recovered from inside the controller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Locale Error: {0}")]
    Locale(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<unic_langid::LanguageIdentifierError> for Error {
    fn from(err: unic_langid::LanguageIdentifierError) -> Self {
        Error::Locale(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{err}"), "Config Error: bad field");
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .expect_err("invalid toml")
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_locale_becomes_locale_error() {
        let err: Error = "@@"
            .parse::<unic_langid::LanguageIdentifier>()
            .expect_err("invalid locale")
            .into();
        assert!(matches!(err, Error::Locale(_)));
    }
}
