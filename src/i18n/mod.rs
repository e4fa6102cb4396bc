//! Internationalization (i18n) core.
//!
//! Everything needed to serve a site in several languages: the closed set of
//! locales, locale extraction from URL paths, static translation lookup, and
//! link/alternate/prerender helpers built on top of extraction.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `language`: The `Locale` enum
//! - `extract`: URL path → locale + logical path
//! - `table` / `translate`: The static translation table and lookups against it
//! - `link`: Localized hrefs and active/related highlighting
//! - `alternates`: `hreflang` alternate links
//! - `prerender`: Per-locale expansion of pre-rendered URLs
//! - `validator`: Translation coverage and quality checks
//! - `metrics`: Lookup counters
//!
//! # Example
//!
//! ```
//! use locale_router::i18n::{extract_locale, translate, Locale};
//!
//! let extracted = extract_locale("/de/about");
//! assert_eq!(extracted.locale, Locale::De);
//! assert_eq!(extracted.logical_path, "/about");
//!
//! assert_eq!(translate("Hello", extracted.locale).unwrap(), "Hallo");
//! ```

mod alternates;
mod error;
mod extract;
mod language;
mod link;
mod metrics;
mod prerender;
mod registry;
mod table;
mod translate;
mod validator;

pub use alternates::{alternate_links, AlternateLink};
pub use error::I18nError;
pub use extract::{extract_locale, ExtractedLocale, UNDEFINED_SEGMENT};
pub use language::Locale;
pub use link::{
    localize_href, path_relevance, resolve_link, segment_matches, LinkState, PathRelevance,
    DEFAULT_HIGHLIGHT_THRESHOLD,
};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use prerender::{expand_prerender, PrerenderPage};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use table::{TranslationEntry, TranslationTable, TRANSLATIONS};
pub use translate::translate;
pub use validator::{
    CoverageReport, DuplicateText, LengthViolation, LocaleCoverage, PatternIssue,
    TranslationPattern, TranslationValidator, ValidationReport, COMMON_PATTERNS,
};
