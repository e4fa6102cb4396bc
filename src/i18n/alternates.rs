//! `hreflang` alternate links pointing search engines at the other
//! language versions of a page.

use crate::i18n::{extract_locale, Locale};
use serde::Serialize;

/// One `<link rel="alternate">` target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub locale: Locale,
    pub href: String,
}

impl AlternateLink {
    /// Render as an HTML `<link>` element.
    pub fn to_html(&self) -> String {
        format!(
            r#"<link rel="alternate" hreflang="{}" href="{}" />"#,
            self.locale.code(),
            self.href
        )
    }
}

/// Alternate links for every locale except `current`.
///
/// `path` may carry a locale prefix; it is reduced to its logical path and a
/// single trailing slash is dropped, so the home page maps to the bare
/// domain for the default locale and to `{domain}/{code}` otherwise.
pub fn alternate_links(domain: &str, current: Locale, path: &str) -> Vec<AlternateLink> {
    let logical = extract_locale(path).logical_path;
    let logical = logical.strip_suffix('/').unwrap_or(&logical);

    Locale::ALL
        .iter()
        .filter(|&&locale| locale != current)
        .map(|&locale| AlternateLink {
            locale,
            href: format!("{}{}{}", domain, locale.url_prefix(), logical),
        })
        .collect()
}
