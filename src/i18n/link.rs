//! Link resolution: localized hrefs and active/related highlighting.
//!
//! A link is *active* when its logical target equals the current logical
//! path, and *related* when enough path segments line up positionally.

use crate::i18n::{extract_locale, Locale};
use serde::Serialize;

/// Matching segments a link must exceed to count as related.
pub const DEFAULT_HIGHLIGHT_THRESHOLD: usize = 1;

/// Highlight state of a link relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathRelevance {
    pub is_active: bool,
    pub is_related: bool,
}

/// Count positions at which two paths have byte-equal segments.
///
/// Segments are compared index by index up to the shorter path's length.
/// A mismatch does not stop the walk, so `/a/x/c` and `/a/y/c` score 3
/// (the empty leading segment, `a` and `c`).
pub fn segment_matches(a: &str, b: &str) -> usize {
    a.split('/')
        .zip(b.split('/'))
        .filter(|(left, right)| left == right)
        .count()
}

/// Compare two logical paths.
///
/// `is_related` never holds for an exact match.
pub fn path_relevance(current: &str, target: &str, threshold: usize) -> PathRelevance {
    let is_active = current == target;
    PathRelevance {
        is_active,
        is_related: !is_active && segment_matches(current, target) > threshold,
    }
}

/// Prefix an internal href with the locale's URL prefix.
///
/// `/` becomes `/{code}` rather than `/{code}/`. External hrefs and the
/// default locale leave the href untouched.
pub fn localize_href(href: &str, locale: Locale) -> String {
    if locale.is_default() || !href.starts_with('/') {
        return href.to_string();
    }
    if href == "/" {
        locale.url_prefix()
    } else {
        format!("{}{}", locale.url_prefix(), href)
    }
}

/// Everything a renderer needs to emit one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkState {
    /// Localized href to emit
    pub href: String,

    pub is_active: bool,
    pub is_related: bool,

    /// The href leaves the site and should open in a new browsing context
    pub opens_new_context: bool,
}

impl LinkState {
    /// CSS classes for the anchor: `is-active`, `is-related`, or neither.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.is_active {
            classes.push("is-active");
        }
        if self.is_related {
            classes.push("is-related");
        }
        classes
    }

    /// Value for the anchor's `target` attribute, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context.then_some("_blank")
    }
}

/// Resolve a link rendered on the page at `current_pathname`.
///
/// `href` is a logical (unprefixed) target. It is localized for `locale`,
/// defaulting to the current page's locale, then both sides are reduced to
/// logical paths before comparison.
pub fn resolve_link(
    current_pathname: &str,
    href: &str,
    locale: Option<Locale>,
    threshold: usize,
) -> LinkState {
    let current = extract_locale(current_pathname);
    let href = localize_href(href, locale.unwrap_or(current.locale));
    let target = extract_locale(&href);
    let relevance = path_relevance(&current.logical_path, &target.logical_path, threshold);

    LinkState {
        opens_new_context: !href.starts_with('/'),
        href,
        is_active: relevance.is_active,
        is_related: relevance.is_related,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Segment Matching ====================

    #[test]
    fn test_segment_matches_sibling_pages() {
        // "", "star-wars"
        assert_eq!(segment_matches("/star-wars/3", "/star-wars/5"), 2);
    }

    #[test]
    fn test_segment_matches_no_early_exit() {
        assert_eq!(segment_matches("/a/x/c", "/a/y/c"), 3);
        assert_eq!(segment_matches("/x/b", "/y/b"), 2);
    }

    #[test]
    fn test_segment_matches_stops_at_shorter() {
        assert_eq!(segment_matches("/star-wars", "/star-wars/3"), 2);
    }

    #[test]
    fn test_segment_matches_root() {
        // "/" splits into two empty segments
        assert_eq!(segment_matches("/", "/"), 2);
        assert_eq!(segment_matches("/", "/about"), 1);
    }

    // ==================== Path Relevance ====================

    #[test]
    fn test_sibling_is_related_not_active() {
        let relevance = path_relevance("/star-wars/3", "/star-wars/5", 1);
        assert!(relevance.is_related);
        assert!(!relevance.is_active);
    }

    #[test]
    fn test_exact_match_is_active_not_related() {
        for threshold in [0, 1, 5] {
            let relevance = path_relevance("/star-wars/3", "/star-wars/3", threshold);
            assert!(relevance.is_active);
            assert!(!relevance.is_related);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!path_relevance("/star-wars/3", "/star-wars/5", 2).is_related);
    }

    #[test]
    fn test_unrelated_top_level_pages() {
        let relevance = path_relevance("/about", "/star-wars", 1);
        assert!(!relevance.is_active);
        assert!(!relevance.is_related);
    }

    // ==================== Localizing ====================

    #[test]
    fn test_localize_href_default_locale() {
        assert_eq!(localize_href("/about", Locale::En), "/about");
        assert_eq!(localize_href("/", Locale::En), "/");
    }

    #[test]
    fn test_localize_href_prefixed_locale() {
        assert_eq!(localize_href("/about", Locale::De), "/de/about");
        assert_eq!(localize_href("/", Locale::Fr), "/fr");
    }

    #[test]
    fn test_localize_href_external() {
        assert_eq!(
            localize_href("https://vike.dev", Locale::De),
            "https://vike.dev"
        );
    }

    // ==================== Resolving ====================

    #[test]
    fn test_resolve_uses_current_locale() {
        let link = resolve_link("/de/star-wars/3", "/star-wars/5", None, 1);
        assert_eq!(link.href, "/de/star-wars/5");
        assert!(link.is_related);
        assert!(!link.is_active);
        assert!(!link.opens_new_context);
    }

    #[test]
    fn test_resolve_active_across_prefix() {
        let link = resolve_link("/fr/about", "/about", None, 1);
        assert_eq!(link.href, "/fr/about");
        assert!(link.is_active);
        assert_eq!(link.class_names(), vec!["is-active"]);
    }

    #[test]
    fn test_resolve_language_switch_link() {
        // A language switcher points at the same page in another locale
        let link = resolve_link("/about", "/about", Some(Locale::Ar), 1);
        assert_eq!(link.href, "/ar/about");
        assert!(link.is_active);
    }

    #[test]
    fn test_resolve_home_link() {
        let link = resolve_link("/zh", "/", None, 1);
        assert_eq!(link.href, "/zh");
        assert!(link.is_active);
    }

    #[test]
    fn test_resolve_external_link() {
        let link = resolve_link("/es/about", "https://github.com", None, 1);
        assert_eq!(link.href, "https://github.com");
        assert!(link.opens_new_context);
        assert_eq!(link.target(), Some("_blank"));
        assert!(!link.is_active);
    }

    #[test]
    fn test_class_names_related() {
        let link = resolve_link("/star-wars/3", "/star-wars/5", None, 1);
        assert_eq!(link.class_names(), vec!["is-related"]);
        assert_eq!(link.target(), None);
    }

    // ==================== Properties ====================

    fn logical_path() -> impl Strategy<Value = String> {
        let segment = "[a-z0-9]{1,4}".prop_filter("not a locale code", |s| Locale::from_code(s).is_err());
        prop::collection::vec(segment, 0..4).prop_map(|segs| format!("/{}", segs.join("/")))
    }

    proptest! {
        #[test]
        fn prop_active_excludes_related(path in logical_path(), threshold in 0usize..6) {
            let relevance = path_relevance(&path, &path, threshold);
            prop_assert!(relevance.is_active);
            prop_assert!(!relevance.is_related);
        }

        #[test]
        fn prop_segment_matches_symmetric(a in logical_path(), b in logical_path()) {
            prop_assert_eq!(segment_matches(&a, &b), segment_matches(&b, &a));
        }

        #[test]
        fn prop_locale_does_not_change_relevance(
            current in logical_path(),
            target in logical_path(),
            index in 0usize..Locale::ALL.len(),
        ) {
            let locale = Locale::ALL[index];
            let plain = resolve_link(&current, &target, Some(Locale::DEFAULT), 1);
            let localized = resolve_link(&localize_href(&current, locale), &target, Some(locale), 1);
            prop_assert_eq!(plain.is_active, localized.is_active);
            prop_assert_eq!(plain.is_related, localized.is_related);
        }
    }
}
