//! Per-request language resolution.
//!
//! [`resolve`] only decides. Emitting the redirect is the HTTP layer's job
//! (see `server::middleware`).

use crate::i18n::{Language, LanguageRegistry};
use crate::negotiation::accept_language;

/// Path prefixes that are never language-prefixed.
const BYPASS_PREFIXES: &[&str] = &["/_assets", "/api", "/favicon.ico"];

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pass,
    Redirect,
}

/// Outcome of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Asset, API or file request; left untouched and carries no language
    Bypass,

    /// The path already names a supported language
    Pass { language: Language },

    /// The path must be re-issued under a language prefix
    Redirect { location: String, language: Language },
}

impl Resolution {
    pub fn action(&self) -> Action {
        match self {
            Resolution::Bypass | Resolution::Pass { .. } => Action::Pass,
            Resolution::Redirect { .. } => Action::Redirect,
        }
    }

    pub fn language(&self) -> Option<Language> {
        match self {
            Resolution::Bypass => None,
            Resolution::Pass { language } | Resolution::Redirect { language, .. } => {
                Some(*language)
            }
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Resolution::Redirect { location, .. } => Some(location),
            _ => None,
        }
    }
}

/// Decide how to serve `path` given the request's `Accept-Language` header.
///
/// A supported language in the path always wins over the header.
pub fn resolve(path: &str, accept_language: Option<&str>) -> Resolution {
    if is_bypassed(path) {
        return Resolution::Bypass;
    }

    if let Some(language) = path_language(path) {
        return Resolution::Pass { language };
    }

    let language = accept_language::negotiate(accept_language);
    Resolution::Redirect {
        location: prefixed_path(language, path),
        language,
    }
}

/// Whether `path` is routed by the host without language handling.
fn is_bypassed(path: &str) -> bool {
    BYPASS_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}

/// The supported language named by the first non-empty path segment.
fn path_language(path: &str) -> Option<Language> {
    let segment = path.split('/').find(|segment| !segment.is_empty())?;

    if LanguageRegistry::get().is_supported(segment) {
        Language::from_code(segment).ok()
    } else {
        None
    }
}

/// `/{language}{path}`, without a trailing slash for the root path.
pub fn prefixed_path(language: Language, path: &str) -> String {
    match path {
        "" | "/" => format!("/{}", language.code()),
        p if p.starts_with('/') => format!("/{}{}", language.code(), p),
        p => format!("/{}/{}", language.code(), p),
    }
}
