//! Error types for the i18n core.

use thiserror::Error;

/// Errors raised by locale parsing, translation lookup and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The source text has no entry in the translation table at all.
    ///
    /// This is a content gap: a UI string was added without being
    /// registered for translation.
    #[error("No translation found for: `{key}`")]
    MissingTranslation { key: String },

    /// A locale code that is not part of the supported set.
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// A validation pattern that failed to compile.
    #[error("Invalid pattern for '{key}': {message}")]
    InvalidPattern { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_translation_names_key() {
        let err = I18nError::MissingTranslation {
            key: "NoSuchKey".to_string(),
        };
        assert_eq!(err.to_string(), "No translation found for: `NoSuchKey`");
    }

    #[test]
    fn test_unknown_locale_message() {
        let err = I18nError::UnknownLocale("xx".to_string());
        assert!(err.to_string().contains("Unknown"));
        assert!(err.to_string().contains("xx"));
    }
}
