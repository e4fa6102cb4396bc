//! Expansion of pre-rendered pages across locales.

use crate::i18n::Locale;
use serde::Serialize;

/// A single page to pre-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerenderPage {
    /// URL the page is written under, with locale prefix
    pub url: String,
    pub locale: Locale,
}

/// Duplicate each logical URL for every locale.
///
/// The default locale keeps the URL as is; other locales get their prefix,
/// so `/` expands to `/`, `/de/`, `/fr/`, …
pub fn expand_prerender<S: AsRef<str>>(logical_urls: &[S]) -> Vec<PrerenderPage> {
    logical_urls
        .iter()
        .flat_map(|url| {
            let url = url.as_ref();
            Locale::ALL.iter().map(move |&locale| PrerenderPage {
                url: format!("{}{}", locale.url_prefix(), url),
                locale,
            })
        })
        .collect()
}
