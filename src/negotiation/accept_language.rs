//! `Accept-Language` header parsing.
//!
//! Deliberately forgiving: anything that cannot be understood degrades to a
//! low priority or is skipped, never to an error.

use crate::i18n::{Language, LanguageRegistry};
use std::cmp::Ordering;

/// One `language[;q=priority]` entry of the header.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LanguagePreference {
    /// Primary subtag, lowercased ("fr" for "fr-FR")
    pub primary: String,

    /// Quality weight; 1.0 when omitted, 0.0 when unparseable
    pub priority: f32,
}

/// Parse a header into preferences, highest priority first.
///
/// The sort is stable, so equal priorities keep their header order.
pub(crate) fn parse(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<_> = header.split(',').filter_map(parse_entry).collect();

    preferences.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
    });

    preferences
}

fn parse_entry(entry: &str) -> Option<LanguagePreference> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let primary = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();

    let priority = parts
        .map(str::trim)
        .find_map(|param| param.strip_prefix("q="))
        .map(parse_priority)
        .unwrap_or(1.0);

    Some(LanguagePreference { primary, priority })
}

fn parse_priority(raw: &str) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// The best supported language named by `header`, if any.
pub(crate) fn preferred_language(header: &str) -> Option<Language> {
    let registry = LanguageRegistry::get();

    parse(header)
        .into_iter()
        .find(|pref| registry.is_supported(&pref.primary))
        .and_then(|pref| Language::from_code(&pref.primary).ok())
}

/// [`preferred_language`], or the default language when the header is
/// absent or names nothing supported.
pub fn negotiate(header: Option<&str>) -> Language {
    header
        .and_then(preferred_language)
        .unwrap_or_else(Language::default_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse Tests ====================

    #[test]
    fn test_parse_defaults_priority_to_one() {
        let prefs = parse("de");
        assert_eq!(
            prefs,
            vec![LanguagePreference {
                primary: "de".to_string(),
                priority: 1.0
            }]
        );
    }

    #[test]
    fn test_parse_strips_region_and_lowercases() {
        let prefs = parse("fr-FR, DE-ch;q=0.7");
        assert_eq!(prefs[0].primary, "fr");
        assert_eq!(prefs[1].primary, "de");
        assert_eq!(prefs[1].priority, 0.7);
    }

    #[test]
    fn test_parse_sorts_descending() {
        let prefs = parse("en;q=0.2,it;q=0.9,de;q=0.5");
        let order: Vec<_> = prefs.iter().map(|p| p.primary.as_str()).collect();
        assert_eq!(order, vec!["it", "de", "en"]);
    }

    #[test]
    fn test_parse_ties_keep_header_order() {
        let prefs = parse("it;q=0.5,en;q=0.5,de;q=0.5");
        let order: Vec<_> = prefs.iter().map(|p| p.primary.as_str()).collect();
        assert_eq!(order, vec!["it", "en", "de"]);
    }

    #[test]
    fn test_parse_malformed_priority_is_zero() {
        let prefs = parse("de;q=abc,it;q=0.1");
        assert_eq!(prefs[0].primary, "it");
        assert_eq!(prefs[1].primary, "de");
        assert_eq!(prefs[1].priority, 0.0);
    }

    #[test]
    fn test_parse_non_finite_priority_is_zero() {
        let prefs = parse("de;q=NaN,en;q=inf");
        assert!(prefs.iter().all(|p| p.priority == 0.0));
    }

    #[test]
    fn test_parse_skips_empty_entries() {
        let prefs = parse(" , ,de,,");
        assert_eq!(prefs.len(), 1);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_tolerates_spaces_and_extra_params() {
        let prefs = parse("de ; level=1 ; q=0.3, it");
        assert_eq!(prefs[0].primary, "it");
        assert_eq!(prefs[1].primary, "de");
        assert_eq!(prefs[1].priority, 0.3);
    }

    // ==================== negotiate Tests ====================

    #[test]
    fn test_negotiate_first_supported_wins() {
        assert_eq!(negotiate(Some("fr-FR,it;q=0.8")), Language::ITALIAN);
        assert_eq!(negotiate(Some("de,en;q=0.5")), Language::GERMAN);
    }

    #[test]
    fn test_negotiate_priority_beats_position() {
        assert_eq!(negotiate(Some("en;q=0.1,de;q=0.9")), Language::GERMAN);
    }

    #[test]
    fn test_negotiate_falls_back_to_default() {
        assert_eq!(negotiate(None), Language::ENGLISH);
        assert_eq!(negotiate(Some("")), Language::ENGLISH);
        assert_eq!(negotiate(Some("fr,es;q=0.9")), Language::ENGLISH);
        assert_eq!(negotiate(Some(";;;,,")), Language::ENGLISH);
        assert_eq!(negotiate(Some("*")), Language::ENGLISH);
    }
}
