//! Alternate-language URLs for `hreflang` hints.

use crate::i18n::{Language, LanguageRegistry};
use serde::Serialize;

/// The same page in one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateUrl {
    pub language: Language,
    pub path: String,
}

/// One path per supported language, in registry order.
///
/// Any leading language segment of `path` is replaced. A missing or empty
/// path yields each language's root.
pub fn alternate_urls(path: Option<&str>) -> Vec<AlternateUrl> {
    let rest = path.map(strip_language).unwrap_or("");

    Language::all()
        .into_iter()
        .map(|language| AlternateUrl {
            language,
            path: if rest.is_empty() {
                format!("/{}", language.code())
            } else {
                format!("/{}/{}", language.code(), rest)
            },
        })
        .collect()
}

/// `path` without its leading slash and leading language segment.
fn strip_language(path: &str) -> &str {
    let clean = path.strip_prefix('/').unwrap_or(path);

    match clean.split_once('/') {
        Some((first, rest)) if LanguageRegistry::get().is_supported(first) => rest,
        None if LanguageRegistry::get().is_supported(clean) => "",
        _ => clean,
    }
}
