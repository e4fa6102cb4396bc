//! Translation table validation.
//!
//! Checks a [`TranslationTable`] for content gaps: keys without
//! translations, empty strings, the same text reused for different keys,
//! pattern violations and overlong strings. Also produces per-locale
//! coverage figures.

use crate::i18n::{I18nError, Locale, TranslationTable};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of [`TranslationValidator::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// `{locale}.{key}` for every required key with no translation
    pub missing: Vec<String>,

    /// `{locale}.{key}` for every translation that is blank
    pub empty: Vec<String>,

    /// Translated texts shared by more than one key within a locale
    pub duplicates: Vec<DuplicateText>,

    /// Share of required keys translated, per locale (0-100)
    pub coverage: BTreeMap<Locale, f64>,
}

impl ValidationReport {
    /// Missing or empty translations make a table invalid; duplicates are
    /// informational.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

/// The same translated text used for several keys in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateText {
    pub locale: Locale,

    /// Normalized (trimmed, lowercased) text
    pub text: String,

    pub keys: Vec<&'static str>,
}

/// A regular expression every translation of `key` must match.
#[derive(Debug, Clone)]
pub struct TranslationPattern {
    pub key: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
}

/// A translation that failed a [`TranslationPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternIssue {
    pub key: &'static str,
    pub issue: String,
}

/// A translation longer than its configured maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthViolation {
    pub key: &'static str,
    pub length: usize,
    pub max: usize,
}

/// Coverage of one locale over every key in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleCoverage {
    pub percentage: f64,
    pub missing: usize,
    pub total: usize,
}

/// Coverage of the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Translations present over translations possible (0-100)
    pub overall: f64,
    pub by_locale: BTreeMap<Locale, LocaleCoverage>,
    pub keys: usize,
    pub translated: usize,
    pub possible: usize,
}

impl CoverageReport {
    /// Human readable multi-line summary.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Overall Translation Coverage: {:.1}%", self.overall),
            format!("Languages: {}", self.by_locale.len()),
            format!("Translation Keys: {}", self.keys),
            format!("Total Translations: {}/{}", self.translated, self.possible),
            String::new(),
            "Per Language:".to_string(),
        ];
        lines.extend(self.by_locale.iter().map(|(locale, coverage)| {
            format!(
                "  {}: {:.1}% ({} missing)",
                locale, coverage.percentage, coverage.missing
            )
        }));
        lines.join("\n")
    }

    /// True when any locale misses a translation.
    pub fn has_gaps(&self) -> bool {
        self.by_locale.values().any(|coverage| coverage.missing > 0)
    }
}

/// Patterns checked by default against the site table.
pub const COMMON_PATTERNS: &[TranslationPattern] = &[
    TranslationPattern {
        key: "Welcome",
        pattern: r"^[\p{Lu}\p{Han}\p{Arabic}¡¿]",
        description: "Should start with capital letter or appropriate character",
    },
    TranslationPattern {
        key: "Change language",
        pattern: r"\S$",
        description: "Should not end with whitespace",
    },
    TranslationPattern {
        key: "Another page",
        pattern: r"\S$",
        description: "Should not end with whitespace",
    },
];

/// Validator over a translation table.
pub struct TranslationValidator<'a> {
    table: &'a TranslationTable,
}

impl<'a> TranslationValidator<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Self { table }
    }

    /// Check that every required key is translated for every locale.
    ///
    /// The default locale is always complete: its text is the key.
    pub fn validate(&self, required_keys: &[&str]) -> ValidationReport {
        let mut missing = Vec::new();
        let mut empty = Vec::new();
        let mut coverage = BTreeMap::new();

        for locale in Locale::ALL {
            let mut valid = 0;
            for key in required_keys {
                match self.lookup(key, locale) {
                    None => missing.push(format!("{}.{}", locale, key)),
                    Some(text) if text.trim().is_empty() => {
                        empty.push(format!("{}.{}", locale, key))
                    }
                    Some(_) => valid += 1,
                }
            }
            coverage.insert(locale, percentage(valid, required_keys.len()));
        }

        ValidationReport {
            missing,
            empty,
            duplicates: self.find_duplicates(),
            coverage,
        }
    }

    /// Check translations against regular expressions.
    ///
    /// Only translations that exist are checked; missing ones are reported
    /// by [`validate`](Self::validate).
    pub fn validate_patterns(
        &self,
        patterns: &[TranslationPattern],
    ) -> Result<BTreeMap<Locale, Vec<PatternIssue>>, I18nError> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Regex::new(p.pattern)
                    .map(|regex| (p, regex))
                    .map_err(|e| I18nError::InvalidPattern {
                        key: p.key.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut issues: BTreeMap<Locale, Vec<PatternIssue>> =
            Locale::ALL.iter().map(|&l| (l, Vec::new())).collect();

        for locale in Locale::ALL {
            for (pattern, regex) in &compiled {
                let Some(text) = self.lookup(pattern.key, locale) else {
                    continue;
                };
                if !regex.is_match(text) {
                    issues.entry(locale).or_default().push(PatternIssue {
                        key: pattern.key,
                        issue: format!("Does not match pattern: {}", pattern.description),
                    });
                }
            }
        }

        Ok(issues)
    }

    /// Report translations longer than the given maximum, in characters.
    pub fn validate_lengths(
        &self,
        max_lengths: &[(&'static str, usize)],
    ) -> BTreeMap<Locale, Vec<LengthViolation>> {
        let mut violations: BTreeMap<Locale, Vec<LengthViolation>> =
            Locale::ALL.iter().map(|&l| (l, Vec::new())).collect();

        for locale in Locale::ALL {
            for &(key, max) in max_lengths {
                let Some(text) = self.lookup(key, locale) else {
                    continue;
                };
                let length = text.chars().count();
                if length > max {
                    violations
                        .entry(locale)
                        .or_default()
                        .push(LengthViolation { key, length, max });
                }
            }
        }

        violations
    }

    /// Coverage of every locale over all keys in the table.
    pub fn coverage(&self) -> CoverageReport {
        let keys = self.table.keys();
        let mut by_locale = BTreeMap::new();
        let mut translated = 0;

        for locale in Locale::ALL {
            let present = keys
                .iter()
                .filter(|key| {
                    self.lookup(key, locale)
                        .is_some_and(|text| !text.trim().is_empty())
                })
                .count();
            translated += present;
            by_locale.insert(
                locale,
                LocaleCoverage {
                    percentage: percentage(present, keys.len()),
                    missing: keys.len() - present,
                    total: keys.len(),
                },
            );
        }

        let possible = keys.len() * Locale::ALL.len();
        CoverageReport {
            overall: percentage(translated, possible),
            by_locale,
            keys: keys.len(),
            translated,
            possible,
        }
    }

    /// Text shown for `key` in `locale`, without fallback.
    fn lookup<'k>(&self, key: &'k str, locale: Locale) -> Option<&'k str> {
        let translations = self.table.get(key)?;
        if locale.is_default() {
            Some(key)
        } else {
            translations.get(&locale).copied()
        }
    }

    fn find_duplicates(&self) -> Vec<DuplicateText> {
        let mut duplicates = Vec::new();

        for locale in Locale::ALL {
            let mut by_text: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();
            for (key, text) in self.table.texts_for(locale) {
                let normalized = text.trim().to_lowercase();
                if !normalized.is_empty() {
                    by_text.entry(normalized).or_default().push(key);
                }
            }

            duplicates.extend(
                by_text
                    .into_iter()
                    .filter(|(_, keys)| keys.len() > 1)
                    .map(|(text, keys)| DuplicateText { locale, text, keys }),
            );
        }

        duplicates
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
