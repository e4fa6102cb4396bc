//! Static translation table.
//!
//! Keys are the source text in the default locale. Each key maps to the
//! translations that exist for it; the default locale never appears in the
//! inner map because its text is the key itself.

use crate::i18n::Locale;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// One row of the compiled-in table: source text and its translations.
pub type TranslationEntry = (&'static str, &'static [(Locale, &'static str)]);

/// Site translations, keyed by English source text.
pub const TRANSLATIONS: &[TranslationEntry] = &[
    ("Hello", &[(Locale::De, "Hallo"), (Locale::Fr, "Bonjour")]),
    ("Hi", &[(Locale::De, "Hallo"), (Locale::Fr, "Salut")]),
    ("Welcome", &[(Locale::De, "Wilkommen"), (Locale::Fr, "Bienvenue")]),
    (
        "This page is",
        &[(Locale::De, "Diese Seite ist"), (Locale::Fr, "Cette page est")],
    ),
    ("Localized", &[(Locale::De, "Loaklisiert"), (Locale::Fr, "Localisé")]),
    (
        "Change language",
        &[(Locale::De, "Sprache wechseln"), (Locale::Fr, "Changer la langue")],
    ),
    (
        "Rendered to HTML",
        &[(Locale::De, "Zu HTML gerendert"), (Locale::Fr, "Rendu en HTML")],
    ),
    ("Interactive", &[(Locale::De, "Interaktiv"), (Locale::Fr, "Interactif")]),
    ("Counter", &[(Locale::De, "Zähler"), (Locale::Fr, "Compteur")]),
    ("Movies", &[(Locale::De, "Filme"), (Locale::Fr, "Les Films")]),
    (
        "Another page",
        &[(Locale::De, "Eine andere Seite"), (Locale::Fr, "Une autre page")],
    ),
    (
        "Star Wars Movies",
        &[(Locale::De, "Star Wars Filme"), (Locale::Fr, "Films Star Wars")],
    ),
    ("Source", &[(Locale::De, "Quelle")]),
    (
        "Release Date",
        &[(Locale::De, "Erscheinungsdatum"), (Locale::Fr, "Date de sortie")],
    ),
    ("Director", &[(Locale::De, "Direktor"), (Locale::Fr, "Directeur")]),
    ("Producer", &[(Locale::De, "Hersteller"), (Locale::Fr, "Producteur")]),
    (
        "You are a stranger",
        &[(Locale::De, "Du bist ein Fremder"), (Locale::Fr, "Vous êtes un inconnu")],
    ),
    (
        "nice to meet you",
        &[
            (Locale::De, "Freut mich, Sie kennenzulernen"),
            (Locale::Fr, "Ravi de faire votre connaissance"),
        ],
    ),
    (
        "Parameterized routes can be defined by exporting a route string in",
        &[
            (
                Locale::De,
                "Parametrisierte routen können durch exportieren einer route string definiert werden",
            ),
            (
                Locale::Fr,
                "Les chemins paramétrés peuvent être définis en exportant une string de route dans",
            ),
        ],
    ),
];

/// Immutable lookup structure built from a list of [`TranslationEntry`] rows.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<&'static str, HashMap<Locale, &'static str>>,
}

/// Global table instance (initialized lazily)
static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the site-wide table built from [`TRANSLATIONS`].
    pub fn global() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable::from_entries(TRANSLATIONS))
    }

    /// Build a table from static rows.
    ///
    /// Translations for the default locale are dropped; the key already is
    /// the default text. Later rows for the same key extend earlier ones.
    pub fn from_entries(rows: &[TranslationEntry]) -> Self {
        let mut entries: HashMap<&'static str, HashMap<Locale, &'static str>> = HashMap::new();
        for (key, translations) in rows {
            let slot = entries.entry(*key).or_default();
            for (locale, text) in translations.iter() {
                if !locale.is_default() {
                    slot.insert(*locale, *text);
                }
            }
        }
        Self { entries }
    }

    /// Translations known for a source key.
    pub fn get(&self, key: &str) -> Option<&HashMap<Locale, &'static str>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All source keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Every translation written for one locale, keyed by source text.
    ///
    /// For the default locale this maps each key to itself.
    pub fn texts_for(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        self.entries
            .iter()
            .filter_map(|(key, translations)| {
                if locale.is_default() {
                    Some((*key, *key))
                } else {
                    translations.get(&locale).map(|text| (*key, *text))
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(
            TranslationTable::global(),
            TranslationTable::global()
        ));
    }

    #[test]
    fn test_global_contains_every_row() {
        let table = TranslationTable::global();
        assert_eq!(table.len(), TRANSLATIONS.len());
        assert!(table.contains_key("Hello"));
        assert!(!table.contains_key("NoSuchKey"));
    }

    #[test]
    fn test_default_locale_never_stored() {
        for (_, translations) in TRANSLATIONS {
            assert!(!translations.iter().any(|(locale, _)| locale.is_default()));
        }

        static ROWS: &[TranslationEntry] = &[("Yes", &[(Locale::En, "Yes"), (Locale::De, "Ja")])];
        let table = TranslationTable::from_entries(ROWS);
        let yes = table.get("Yes").unwrap();
        assert_eq!(yes.len(), 1);
        assert_eq!(yes.get(&Locale::De), Some(&"Ja"));
    }

    #[test]
    fn test_duplicate_rows_merge() {
        static ROWS: &[TranslationEntry] = &[
            ("No", &[(Locale::De, "Nein")]),
            ("No", &[(Locale::Fr, "Non")]),
        ];
        let table = TranslationTable::from_entries(ROWS);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("No").unwrap().len(), 2);
    }

    #[test]
    fn test_keys_sorted() {
        let keys = TranslationTable::global().keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_texts_for_default_is_identity() {
        let texts = TranslationTable::global().texts_for(Locale::DEFAULT);
        assert_eq!(texts.len(), TRANSLATIONS.len());
        assert_eq!(texts.get("Movies"), Some(&"Movies"));
    }

    #[test]
    fn test_texts_for_partial_locale() {
        let table = TranslationTable::global();
        let french = table.texts_for(Locale::Fr);
        assert_eq!(french.get("Movies"), Some(&"Les Films"));
        // "Source" has no French translation
        assert!(!french.contains_key("Source"));
        assert!(table.texts_for(Locale::Zh).is_empty());
    }
}
