//! Translation tables and the fallback lookup.
//!
//! A lookup never fails. A missing key yields the key itself and a missing
//! language yields the default language's string. Both cases are reported as
//! a [`LookupIssue`], logged, and counted in [`LookupMetrics`].

use crate::i18n::strings::{MESSAGES, SLUGS};
use crate::i18n::{Language, LookupMetrics};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// One table row: a key and its `(language code, text)` pairs.
pub type Entry = (&'static str, &'static [(&'static str, &'static str)]);

/// A non-fatal problem found while looking up a string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupIssue {
    #[error("{table} key not found: {key}")]
    MissingKey { table: &'static str, key: String },

    #[error("{table} entry not found for key {key} in language {language}")]
    MissingTranslation {
        table: &'static str,
        key: String,
        language: String,
    },
}

/// Result of a lookup: the text to display, plus the issue if a fallback was
/// taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<'a> {
    pub value: &'a str,
    pub issue: Option<LookupIssue>,
}

/// Read-only key → language → text mapping.
pub struct TranslationTable {
    /// Used in diagnostics ("messages", "slugs")
    name: &'static str,
    entries: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static MESSAGE_TABLE: OnceLock<TranslationTable> = OnceLock::new();
static SLUG_TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    pub fn new(name: &'static str, entries: &'static [Entry]) -> Self {
        let entries = entries
            .iter()
            .map(|(key, translations)| (*key, translations.iter().copied().collect()))
            .collect();

        Self { name, entries }
    }

    /// The site copy table.
    pub fn messages() -> &'static TranslationTable {
        MESSAGE_TABLE.get_or_init(|| TranslationTable::new("messages", MESSAGES))
    }

    /// The localized slug table.
    pub fn slugs() -> &'static TranslationTable {
        SLUG_TABLE.get_or_init(|| TranslationTable::new("slugs", SLUGS))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Languages with an entry for `key`, sorted. Empty if the key is unknown.
    pub fn languages_for(&self, key: &str) -> Vec<&'static str> {
        let mut languages: Vec<_> = self
            .entries
            .get(key)
            .map(|translations| translations.keys().copied().collect())
            .unwrap_or_default();
        languages.sort_unstable();
        languages
    }

    /// Resolve `key` for `language` without any logging.
    ///
    /// `language` is a raw code and need not be supported; unsupported codes
    /// simply take the default-language fallback.
    pub fn lookup<'a>(&'a self, key: &'a str, language: &str) -> Lookup<'a> {
        let Some(translations) = self.entries.get(key) else {
            return Lookup {
                value: key,
                issue: Some(LookupIssue::MissingKey {
                    table: self.name,
                    key: key.to_string(),
                }),
            };
        };

        if let Some(value) = translations.get(language).copied() {
            return Lookup { value, issue: None };
        }

        let default = Language::default_language();
        Lookup {
            value: translations.get(default.code()).copied().unwrap_or(key),
            issue: Some(LookupIssue::MissingTranslation {
                table: self.name,
                key: key.to_string(),
                language: language.to_string(),
            }),
        }
    }

    /// [`TranslationTable::lookup`], logging and counting any fallback.
    pub fn lookup_and_record<'a>(&'a self, key: &'a str, language: &str) -> Lookup<'a> {
        let lookup = self.lookup(key, language);
        record(&lookup);
        lookup
    }

    /// Resolve `key` for `language`, logging and counting any fallback.
    pub fn get<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        self.lookup_and_record(key, language).value
    }

    /// Every key resolved for `language`, fallbacks applied, without logging.
    pub fn resolve_all(&self, language: &str) -> BTreeMap<&'static str, &str> {
        self.keys()
            .into_iter()
            .map(|key| (key, self.lookup(key, language).value))
            .collect()
    }
}

/// Log and count the outcome of a lookup.
fn record(lookup: &Lookup<'_>) {
    let metrics = LookupMetrics::global();
    metrics.record_lookup();

    let Some(issue) = &lookup.issue else {
        return;
    };

    match issue {
        LookupIssue::MissingKey { table, key } => {
            metrics.record_missing_key();
            warn!(table = %table, key = %key, "{}", issue);
        }
        LookupIssue::MissingTranslation {
            table,
            key,
            language,
        } => {
            metrics.record_missing_translation();
            warn!(table = %table, key = %key, language = %language, "{}", issue);
        }
    }
}

/// Look up a display string in the message table.
pub fn translate<'a>(key: &'a str, language: &str) -> &'a str {
    TranslationTable::messages().get(key, language)
}

/// Look up a URL slug in the slug table.
pub fn localized_slug<'a>(key: &'a str, language: &str) -> &'a str {
    TranslationTable::slugs().get(key, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const PARTIAL: &[Entry] = &[
        ("greeting", &[("en", "Hello"), ("de", "Hallo")]),
        ("farewell", &[("de", "Tschüss")]),
    ];

    fn partial_table() -> TranslationTable {
        TranslationTable::new("test", PARTIAL)
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_exact_hit() {
        let table = partial_table();
        let lookup = table.lookup("greeting", "de");
        assert_eq!(lookup.value, "Hallo");
        assert!(lookup.issue.is_none());
    }

    #[test]
    fn test_lookup_missing_language_falls_back_to_default() {
        let table = partial_table();
        let lookup = table.lookup("greeting", "it");
        assert_eq!(lookup.value, "Hello");
        assert_eq!(
            lookup.issue,
            Some(LookupIssue::MissingTranslation {
                table: "test",
                key: "greeting".to_string(),
                language: "it".to_string(),
            })
        );
    }

    #[test]
    fn test_lookup_missing_default_falls_back_to_key() {
        let table = partial_table();
        let lookup = table.lookup("farewell", "it");
        assert_eq!(lookup.value, "farewell");
        assert!(matches!(
            lookup.issue,
            Some(LookupIssue::MissingTranslation { .. })
        ));
    }

    #[test]
    fn test_lookup_missing_key_returns_key() {
        let table = partial_table();
        let lookup = table.lookup("no.such.key", "en");
        assert_eq!(lookup.value, "no.such.key");
        assert_eq!(
            lookup.issue,
            Some(LookupIssue::MissingKey {
                table: "test",
                key: "no.such.key".to_string(),
            })
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = LookupIssue::MissingKey {
            table: "messages",
            key: "a.b".to_string(),
        };
        assert_eq!(issue.to_string(), "messages key not found: a.b");

        let issue = LookupIssue::MissingTranslation {
            table: "slugs",
            key: "a.b".to_string(),
            language: "xx".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "slugs entry not found for key a.b in language xx"
        );
    }

    // ==================== Site Table Tests ====================

    #[test]
    #[serial]
    fn test_translate_known_values() {
        assert_eq!(translate("nav.home", "it"), "Home");
        assert_eq!(translate("nav.services", "de"), "Dienstleistungen");
        assert_eq!(translate("nav.home", "xx"), "Home");
        assert_eq!(translate("no.such.key", "en"), "no.such.key");
    }

    #[test]
    #[serial]
    fn test_translate_is_idempotent() {
        let first = translate("common.learn_more", "it");
        let second = translate("common.learn_more", "it");
        assert_eq!(first, second);
        assert_eq!(first, "Scopri di più");
    }

    #[test]
    #[serial]
    fn test_localized_slug() {
        assert_eq!(localized_slug("services.ai_integration", "de"), "ki-integration");
        assert_eq!(localized_slug("locations.uk", "it"), "regno-unito");
        assert_eq!(localized_slug("locations.uk", "fr"), "united-kingdom");
        assert_eq!(localized_slug("nav.home", "en"), "nav.home");
    }

    #[test]
    #[serial]
    fn test_get_records_fallbacks() {
        let metrics = LookupMetrics::global();
        metrics.reset();

        let table = partial_table();
        table.get("greeting", "en");
        table.get("greeting", "it");
        table.get("missing", "en");

        assert_eq!(metrics.lookups(), 3);
        assert_eq!(metrics.missing_translations(), 1);
        assert_eq!(metrics.missing_keys(), 1);
    }

    #[test]
    #[serial]
    fn test_lookup_does_not_touch_metrics() {
        // lookup() is the pure half; only get() records
        let metrics = LookupMetrics::global();
        metrics.reset();

        let table = partial_table();
        assert!(matches!(
            table.lookup("missing", "en").issue,
            Some(LookupIssue::MissingKey { .. })
        ));
        assert!(table.lookup("greeting", "it").issue.is_some());
        let _ = table.lookup("greeting", "en");

        assert_eq!(metrics.lookups(), 0);
        assert_eq!(metrics.missing_keys(), 0);
        assert_eq!(metrics.missing_translations(), 0);
    }

    #[test]
    fn test_keys_sorted_and_languages_for() {
        let table = partial_table();
        assert_eq!(table.keys(), vec!["farewell", "greeting"]);
        assert_eq!(table.languages_for("greeting"), vec!["de", "en"]);
        assert!(table.languages_for("nope").is_empty());
        assert!(table.contains_key("farewell"));
        assert_eq!(table.name(), "test");
    }

    #[test]
    fn test_resolve_all_applies_fallbacks() {
        let table = partial_table();
        let resolved = table.resolve_all("it");
        assert_eq!(resolved.get("greeting"), Some(&"Hello"));
        assert_eq!(resolved.get("farewell"), Some(&"farewell"));
    }
}
