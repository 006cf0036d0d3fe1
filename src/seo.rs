//! Per-page metadata: localized title/description, Open Graph locale, and
//! the `hreflang` alternate links.

use crate::i18n::{translate, Language};
use crate::negotiation::{alternate_urls, prefixed_path, AlternateUrl};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub language: Language,
    pub title: &'static str,
    pub description: &'static str,
    pub og_locale: &'static str,
    /// Absolute URL of this page in this language
    pub canonical: String,
    pub alternates: Vec<AlternateUrl>,
}

impl PageMetadata {
    /// Metadata for `path` served in `language`.
    ///
    /// `path` may or may not carry a language prefix; the canonical URL is
    /// always the `language` variant.
    pub fn for_page(language: Language, path: &str, site_url: &str) -> Self {
        let alternates = alternate_urls(Some(path));
        let own_path = alternates
            .iter()
            .find(|alt| alt.language == language)
            .map(|alt| alt.path.clone())
            .unwrap_or_else(|| prefixed_path(language, "/"));

        Self {
            language,
            title: translate("meta.title", language.code()),
            description: translate("meta.description", language.code()),
            og_locale: language.og_locale(),
            canonical: format!("{}{}", site_url, own_path),
            alternates,
        }
    }

    pub fn alternate_links(&self, site_url: &str) -> String {
        render_alternate_links(site_url, &self.alternates)
    }
}

/// One `<link rel="alternate">` tag per alternate, newline separated.
pub fn render_alternate_links(site_url: &str, alternates: &[AlternateUrl]) -> String {
    alternates
        .iter()
        .map(|alt| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}{}" />"#,
                alt.language.code(),
                site_url,
                alt.path
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
