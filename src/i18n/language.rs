//! Locale type: the closed set of languages the site is served in.
//!
//! Unsupported locale values are unrepresentable; string codes coming from
//! URLs or query parameters are parsed with [`Locale::from_code`].

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry, TextDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// Variant order is the registry order; `En` is the default locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
    Fr,
    Zh,
    Es,
    Ar,
}

impl Locale {
    /// The default locale. Never used as a URL prefix.
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, default first.
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::De,
        Locale::Fr,
        Locale::Zh,
        Locale::Es,
        Locale::Ar,
    ];

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The lowercase ISO 639-1 code (e.g., "en", "de")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err(I18nError::UnknownLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.locale)
            .ok_or_else(|| I18nError::UnknownLocale(code.to_string()))
    }

    /// Parse a URL path segment as a locale prefix.
    ///
    /// Only non-default locales are prefixes; `"en"` yields `None`.
    pub fn from_prefix(segment: &str) -> Option<Locale> {
        Locale::from_code(segment)
            .ok()
            .filter(|locale| !locale.is_default())
    }

    /// The ISO 639-1 code (e.g., "en", "ar").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Zh => "zh",
            Locale::Es => "es",
            Locale::Ar => "ar",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::DEFAULT
    }

    /// Get the full locale configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// URL prefix for this locale: empty for the default, `/{code}` otherwise.
    pub fn url_prefix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("/{}", self.code())
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}
