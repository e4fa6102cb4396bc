//! Language registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the site is
//! served in. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::i18n::Locale;
use serde::Serialize;
use std::sync::OnceLock;

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value suitable for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale: its tag, names, text
/// direction, and whether it's the default (unprefixed) locale.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// English name of the language (e.g., "English", "German", "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Deutsch", "العربية")
    pub native_name: &'static str,

    /// Script direction used when rendering this locale
    pub direction: TextDirection,

    /// Whether this is the default locale (only one should be true).
    /// The default locale is never used as a URL prefix and its strings are
    /// the translation table keys.
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// Entries are stored in `Locale::ALL` order, so a locale's discriminant is
/// its index. Initialized once on first access, immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: Locale::ALL.iter().map(|&locale| default_config(locale)).collect(),
        })
    }

    /// Get the configuration for a locale.
    pub fn config(&self, locale: Locale) -> &LanguageConfig {
        &self.languages[locale as usize]
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.locale.code() == code)
    }

    /// Get all locales, default first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get every locale that is served under a URL prefix.
    pub fn list_prefixed(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| !lang.is_default).collect()
    }

    /// Get the default locale configuration.
    pub fn default_language(&self) -> &LanguageConfig {
        self.config(Locale::DEFAULT)
    }

    /// Check if a code names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_config(locale: Locale) -> LanguageConfig {
    let (name, native_name, direction) = match locale {
        Locale::En => ("English", "English", TextDirection::Ltr),
        Locale::De => ("German", "Deutsch", TextDirection::Ltr),
        Locale::Fr => ("French", "Français", TextDirection::Ltr),
        Locale::Zh => ("Chinese", "中文", TextDirection::Ltr),
        Locale::Es => ("Spanish", "Español", TextDirection::Ltr),
        Locale::Ar => ("Arabic", "العربية", TextDirection::Rtl),
    };

    LanguageConfig {
        locale,
        name,
        native_name,
        direction,
        is_default: locale == Locale::DEFAULT,
    }
}
