//! Language type: a code that is known to be in the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported language.
///
/// Only codes present in the [`LanguageRegistry`] can be turned into a
/// `Language`, so holding one means the language is servable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "de")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ITALIAN: Language = Language { code: "it" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Like [`Language::from_code`], but unknown codes become the default
    /// language. Used wherever a URL segment is trusted to name a language.
    pub fn from_code_or_default(code: &str) -> Language {
        Language::from_code(code).unwrap_or_else(|_| Language::default_language())
    }

    /// The language used when nothing else matches.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Every supported language, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .codes()
            .map(|code| Language { code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Never for a `Language` built through this module's constructors.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_match_registry() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("de").unwrap(), Language::GERMAN);
        assert_eq!(Language::from_code("it").unwrap(), Language::ITALIAN);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_unknown() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_or_default() {
        assert_eq!(Language::from_code_or_default("it"), Language::ITALIAN);
        assert_eq!(Language::from_code_or_default("xx"), Language::ENGLISH);
        assert_eq!(Language::from_code_or_default(""), Language::ENGLISH);
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
        assert!(Language::ENGLISH.is_default());
        assert!(!Language::GERMAN.is_default());
    }

    #[test]
    fn test_all_in_registry_order() {
        assert_eq!(
            Language::all(),
            vec![Language::ENGLISH, Language::GERMAN, Language::ITALIAN]
        );
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_names_and_locale() {
        assert_eq!(Language::ITALIAN.name(), "Italian");
        assert_eq!(Language::ITALIAN.native_name(), "Italiano");
        assert_eq!(Language::ITALIAN.og_locale(), "it_IT");
    }

    #[test]
    fn test_display_and_serialize_as_code() {
        assert_eq!(Language::GERMAN.to_string(), "de");
        assert_eq!(
            serde_json::to_string(&Language::GERMAN).unwrap(),
            "\"de\""
        );
    }
}
