//! Catalog completeness checks.
//!
//! Lookups tolerate gaps in the tables. This module finds those gaps up front
//! so they are reported once at startup instead of once per request.

use crate::i18n::{LanguageRegistry, TranslationTable};

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys that will render as the raw key in some language
    pub errors: Vec<String>,

    /// Keys that will render in the default language somewhere
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table coverage.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check every key of `table` against the supported languages.
    ///
    /// - missing default-language entry: error
    /// - missing entry for another supported language: warning
    /// - entry in a language the site does not serve: warning
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let registry = LanguageRegistry::get();
        let default = registry.default_language().code;
        let mut report = ValidationReport::new();

        for key in table.keys() {
            let present = table.languages_for(key);

            for code in registry.codes() {
                if present.contains(&code) {
                    continue;
                }
                if code == default {
                    report.errors.push(format!(
                        "{}: key {} has no default language ({}) entry",
                        table.name(),
                        key,
                        default
                    ));
                } else {
                    report.warnings.push(format!(
                        "{}: key {} is missing language {}",
                        table.name(),
                        key,
                        code
                    ));
                }
            }

            for code in present {
                if !registry.is_supported(code) {
                    report.warnings.push(format!(
                        "{}: key {} has entry for unsupported language {}",
                        table.name(),
                        key,
                        code
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::Entry;

    // ==================== Report Tests ====================

    #[test]
    fn test_new_report_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
        assert_eq!(report, ValidationReport::default());
    }

    // ==================== Site Table Tests ====================

    #[test]
    fn test_site_messages_are_complete() {
        let report = CatalogValidator::validate(TranslationTable::messages());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_site_slugs_are_complete() {
        let report = CatalogValidator::validate(TranslationTable::slugs());
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Gap Detection Tests ====================

    const GAPPY: &[Entry] = &[
        ("only.german", &[("de", "Nur Deutsch")]),
        (
            "with.french",
            &[("en", "Hi"), ("de", "Hallo"), ("it", "Ciao"), ("fr", "Salut")],
        ),
    ];

    #[test]
    fn test_missing_default_is_error() {
        let report = CatalogValidator::validate(&TranslationTable::new("gappy", GAPPY));

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("only.german"));
        assert!(report.errors[0].contains("(en)"));
    }

    #[test]
    fn test_missing_other_language_is_warning() {
        let report = CatalogValidator::validate(&TranslationTable::new("gappy", GAPPY));

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("only.german") && w.contains("missing language it")));
    }

    #[test]
    fn test_unsupported_language_is_warning() {
        let report = CatalogValidator::validate(&TranslationTable::new("gappy", GAPPY));

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("with.french") && w.contains("unsupported language fr")));
    }
}
