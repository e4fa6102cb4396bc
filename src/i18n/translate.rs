//! Translation lookup against the static table.

use crate::i18n::{I18nError, Locale, TranslationMetrics, TranslationTable};
use tracing::{debug, warn};

impl TranslationTable {
    /// Translate `text` into `locale`.
    ///
    /// * Default locale: `text` is returned as is.
    /// * Key present with an entry for `locale`: the translation.
    /// * Key present without an entry for `locale`: `text`, with a warning.
    /// * Key absent: `I18nError::MissingTranslation`.
    pub fn translate<'a>(&self, text: &'a str, locale: Locale) -> Result<&'a str, I18nError> {
        let metrics = TranslationMetrics::global();

        if locale.is_default() {
            metrics.record_identity();
            return Ok(text);
        }

        let Some(translations) = self.get(text) else {
            metrics.record_missing();
            warn!(key = text, locale = %locale, "No translation entry for key");
            return Err(I18nError::MissingTranslation {
                key: text.to_string(),
            });
        };

        match translations.get(&locale) {
            Some(translated) => {
                metrics.record_hit();
                debug!(key = text, locale = %locale, "Translation hit");
                Ok(*translated)
            }
            None => {
                metrics.record_fallback();
                warn!(
                    key = text,
                    locale = %locale,
                    "Key has no translation for locale, using source text"
                );
                Ok(text)
            }
        }
    }
}

/// Translate `text` into `locale` using the site-wide table.
///
/// # Example
///
/// ```
/// use locale_router::i18n::{translate, Locale};
///
/// assert_eq!(translate("Hello", Locale::De).unwrap(), "Hallo");
/// assert_eq!(translate("Hello", Locale::En).unwrap(), "Hello");
/// assert!(translate("NoSuchKey", Locale::De).is_err());
/// ```
pub fn translate(text: &str, locale: Locale) -> Result<&str, I18nError> {
    TranslationTable::global().translate(text, locale)
}
