//! Locale extraction: splits a raw URL path into its locale and logical path.

use crate::i18n::Locale;
use serde::Serialize;

/// Path segment produced when an optional locale route parameter was
/// serialized without a value.
pub const UNDEFINED_SEGMENT: &str = "undefined";

/// Result of [`extract_locale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedLocale {
    /// Locale named by the path prefix, or the default locale
    pub locale: Locale,

    /// The path with any locale prefix removed
    pub logical_path: String,
}

impl ExtractedLocale {
    fn unprefixed(path: &str) -> Self {
        Self {
            locale: Locale::DEFAULT,
            logical_path: path.to_string(),
        }
    }
}

/// Determine the locale of a URL path and strip its locale prefix.
///
/// `/de/about` yields `(de, /about)`; `/about` yields `(en, /about)`.
/// Only non-default locales are recognized as prefixes, and unknown prefixes
/// fall back to the default locale with the path left untouched. Paths that
/// do not start with `/` are returned unchanged.
pub fn extract_locale(path: &str) -> ExtractedLocale {
    if path == "/" || !path.starts_with('/') {
        return ExtractedLocale::unprefixed(path);
    }

    // Segment 0 is the empty string before the leading slash.
    let mut segments = path.split('/').skip(1);
    let first = segments.next().unwrap_or_default();

    if first == UNDEFINED_SEGMENT {
        let rest = &path[1 + UNDEFINED_SEGMENT.len()..];
        return ExtractedLocale {
            locale: Locale::DEFAULT,
            logical_path: format!("/{}", rest.strip_prefix('/').unwrap_or(rest)),
        };
    }

    match Locale::from_prefix(first) {
        Some(locale) => ExtractedLocale {
            locale,
            logical_path: format!("/{}", segments.collect::<Vec<_>>().join("/")),
        },
        None => ExtractedLocale::unprefixed(path),
    }
}
