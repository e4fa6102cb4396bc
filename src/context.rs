//! Per-navigation page context.
//!
//! Built once per request from the original URL. Rendering code reads the
//! resolved locale and logical URL from here instead of re-parsing the path.

use crate::i18n::{
    alternate_links, extract_locale, resolve_link, translate, AlternateLink, I18nError, LinkState,
    Locale, TextDirection,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Locale resolved from the URL prefix
    pub locale: Locale,

    /// URL as received, including query string
    pub url_original: String,

    /// Path component of `url_original`
    pub url_pathname: String,

    /// `url_pathname` with the locale prefix removed; used for route matching
    pub url_logical: String,
}

impl PageContext {
    /// Resolve the locale of a URL (path plus optional query/fragment).
    pub fn from_url(url_original: &str) -> Self {
        let url_pathname = url_original
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string();
        let extracted = extract_locale(&url_pathname);

        Self {
            locale: extracted.locale,
            url_original: url_original.to_string(),
            url_logical: extracted.logical_path,
            url_pathname,
        }
    }

    /// Query string of the original URL, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        let (_, rest) = self.url_original.split_once('?')?;
        Some(rest.split('#').next().unwrap_or_default())
    }

    pub fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    /// Translate text into this page's locale.
    pub fn translate<'a>(&self, text: &'a str) -> Result<&'a str, I18nError> {
        translate(text, self.locale)
    }

    /// Resolve a link rendered on this page.
    pub fn link(&self, href: &str, locale: Option<Locale>, threshold: usize) -> LinkState {
        resolve_link(&self.url_pathname, href, locale, threshold)
    }

    /// `hreflang` alternates for this page.
    pub fn alternates(&self, domain: &str) -> Vec<AlternateLink> {
        alternate_links(domain, self.locale, &self.url_pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DEFAULT_HIGHLIGHT_THRESHOLD;
    use serial_test::serial;

    #[test]
    fn test_from_url_prefixed() {
        let ctx = PageContext::from_url("/de/star-wars/3");
        assert_eq!(ctx.locale, Locale::De);
        assert_eq!(ctx.url_pathname, "/de/star-wars/3");
        assert_eq!(ctx.url_logical, "/star-wars/3");
    }

    #[test]
    fn test_from_url_strips_query_and_fragment() {
        let ctx = PageContext::from_url("/fr/about?tab=team#top");
        assert_eq!(ctx.locale, Locale::Fr);
        assert_eq!(ctx.url_original, "/fr/about?tab=team#top");
        assert_eq!(ctx.url_pathname, "/fr/about");
        assert_eq!(ctx.url_logical, "/about");
        assert_eq!(ctx.query(), Some("tab=team"));
    }

    #[test]
    fn test_query_absent() {
        assert_eq!(PageContext::from_url("/about").query(), None);
    }

    #[test]
    fn test_from_url_root() {
        let ctx = PageContext::from_url("/?x=1");
        assert_eq!(ctx.locale, Locale::DEFAULT);
        assert_eq!(ctx.url_logical, "/");
    }

    #[test]
    fn test_direction_follows_locale() {
        assert_eq!(PageContext::from_url("/ar").direction(), TextDirection::Rtl);
        assert_eq!(PageContext::from_url("/").direction(), TextDirection::Ltr);
    }

    #[test]
    #[serial]
    fn test_translate_uses_page_locale() {
        assert_eq!(
            PageContext::from_url("/fr/").translate("Welcome").unwrap(),
            "Bienvenue"
        );
        assert_eq!(
            PageContext::from_url("/").translate("Welcome").unwrap(),
            "Welcome"
        );
    }

    #[test]
    fn test_link_on_page() {
        let ctx = PageContext::from_url("/es/star-wars/1");
        let link = ctx.link("/star-wars/4", None, DEFAULT_HIGHLIGHT_THRESHOLD);
        assert_eq!(link.href, "/es/star-wars/4");
        assert!(link.is_related);
    }

    #[test]
    fn test_alternates_for_page() {
        let ctx = PageContext::from_url("/de/about");
        let links = ctx.alternates("https://example.org");
        assert!(links
            .iter()
            .any(|l| l.href == "https://example.org/about" && l.locale == Locale::En));
    }
}
