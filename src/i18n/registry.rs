//! Language registry: Single source of truth for all supported languages.
//!
//! The site is served in a fixed, ordered set of languages. The registry is a
//! lazily initialized singleton (`OnceLock`) and never changes after startup.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "de", "it")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch", "Italiano")
    pub native_name: &'static str,

    /// Open Graph locale used in page metadata (e.g., "de_DE")
    pub og_locale: &'static str,

    /// Whether this is the default language (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// Order matters: it is the order in which alternate URLs and language
/// switchers are emitted.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: "DE" and "de-CH" are not "de".
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in registry order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Supported language codes, in registry order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|lang| lang.code)
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are flagged as default. The list is
    /// static, so this can only be a programming error.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The languages the site is published in. English is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            og_locale: "de_DE",
            is_default: false,
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            og_locale: "it_IT",
            is_default: false,
        },
    ]
}
