//! Route handlers.

use crate::content::{service_location_pairs, Location, Service, LOCATIONS, SERVICES};
use crate::i18n::{translate, Language, LookupIssue, LookupMetrics, MetricsReport, TranslationTable};
use crate::negotiation::{alternate_urls, prefixed_path};
use crate::seo::PageMetadata;
use crate::server::state::{ApiResponse, AppError, AppState};
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==================== API ====================

pub async fn health_handler() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("OK".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    pub key: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub key: String,
    pub language: String,
    pub value: String,
    pub issue: Option<LookupIssue>,
}

pub async fn translate_handler(
    Query(query): Query<TranslateQuery>,
) -> Result<Json<ApiResponse<TranslateResponse>>, AppError> {
    if query.key.trim().is_empty() {
        return Err(AppError::BadRequest("key must not be empty".to_string()));
    }

    let language = query
        .lang
        .unwrap_or_else(|| Language::default_language().code().to_string());
    let lookup = TranslationTable::messages().lookup_and_record(&query.key, &language);

    Ok(Json(ApiResponse::success(TranslateResponse {
        value: lookup.value.to_string(),
        issue: lookup.issue,
        key: query.key.clone(),
        language,
    })))
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub language: Language,
    pub messages: BTreeMap<&'static str, &'static str>,
}

/// The whole message table for one language, for client-side rendering.
/// Unsupported languages get the default language.
pub async fn translations_handler(Path(lang): Path<String>) -> Json<ApiResponse<TranslationsResponse>> {
    let language = Language::from_code_or_default(&lang);

    Json(ApiResponse::success(TranslationsResponse {
        language,
        messages: TranslationTable::messages().resolve_all(language.code()),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AlternatesQuery {
    pub path: Option<String>,
}

pub async fn alternates_handler(
    Query(query): Query<AlternatesQuery>,
) -> Json<ApiResponse<BTreeMap<&'static str, String>>> {
    let alternates = alternate_urls(query.path.as_deref())
        .into_iter()
        .map(|alt| (alt.language.code(), alt.path))
        .collect();

    Json(ApiResponse::success(alternates))
}

pub async fn metrics_handler() -> Json<ApiResponse<MetricsReport>> {
    Json(ApiResponse::success(LookupMetrics::global().report()))
}

// ==================== Pages ====================

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// A link to a service or location page, with the slug the page is known
/// by in the current language.
#[derive(Debug, Serialize)]
pub struct ContentLink {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub href: String,
}

/// What the rendering layer needs for one localized page.
#[derive(Debug, Serialize)]
pub struct PageDescriptor {
    pub language: Language,
    pub path: String,
    pub heading: String,
    pub metadata: PageMetadata,
    pub navigation: Vec<NavLink>,
    pub links: Vec<ContentLink>,
    pub alternate_links: String,
    pub footer: &'static str,
}

pub async fn home_page_handler(
    State(state): State<AppState>,
    language: Option<Extension<Language>>,
    uri: Uri,
) -> Result<Json<ApiResponse<PageDescriptor>>, AppError> {
    page(&state, language, &uri, "")
}

pub async fn page_handler(
    State(state): State<AppState>,
    language: Option<Extension<Language>>,
    uri: Uri,
    Path((_lang, rest)): Path<(String, String)>,
) -> Result<Json<ApiResponse<PageDescriptor>>, AppError> {
    page(&state, language, &uri, &rest)
}

fn page(
    state: &AppState,
    language: Option<Extension<Language>>,
    uri: &Uri,
    rest: &str,
) -> Result<Json<ApiResponse<PageDescriptor>>, AppError> {
    // Only requests the redirect middleware let through carry a language
    let Some(Extension(language)) = language else {
        return Err(AppError::NotFound(uri.path().to_string()));
    };

    let heading = page_heading(language, rest)
        .ok_or_else(|| AppError::NotFound(uri.path().to_string()))?;

    let site_url = &state.config.site_url;
    let metadata = PageMetadata::for_page(language, uri.path(), site_url);

    Ok(Json(ApiResponse::success(PageDescriptor {
        language,
        path: uri.path().to_string(),
        heading,
        alternate_links: metadata.alternate_links(site_url),
        metadata,
        navigation: navigation(language),
        links: content_links(language, rest),
        footer: translate("footer.rights", language.code()),
    })))
}

/// Heading for a page path (below the language segment), or `None` if the
/// site has no such page.
fn page_heading(language: Language, rest: &str) -> Option<String> {
    let code = language.code();
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    let heading = match segments.as_slice() {
        [] => translate("home.hero.title", code).to_string(),
        ["services"] => translate("nav.services", code).to_string(),
        ["services", id] => Service::find(id)?.title(language).to_string(),
        ["services", id, location] => {
            let service = Service::find(id)?;
            let location = Location::find(location)?;
            format!("{} | {}", service.title(language), location.title(language))
        }
        ["locations"] => translate("nav.locations", code).to_string(),
        ["locations", id] => Location::find(id)?.title(language).to_string(),
        ["contact"] => translate("nav.contact", code).to_string(),
        _ => return None,
    };

    Some(heading)
}

/// Service and location links listed on a page. Only the overview pages and
/// the service detail page list any.
fn content_links(language: Language, rest: &str) -> Vec<ContentLink> {
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["services"] => SERVICES
            .iter()
            .map(|service| ContentLink {
                id: service.id,
                title: service.title(language),
                slug: service.slug(language),
                href: prefixed_path(language, &format!("/services/{}", service.id)),
            })
            .collect(),
        ["services", id] => service_location_pairs()
            .filter(|(service, _)| service.id == *id)
            .map(|(service, location)| ContentLink {
                id: location.id,
                title: location.title(language),
                slug: location.slug(language),
                href: prefixed_path(
                    language,
                    &format!("/services/{}/{}", service.id, location.id),
                ),
            })
            .collect(),
        ["locations"] => LOCATIONS
            .iter()
            .map(|location| ContentLink {
                id: location.id,
                title: location.title(language),
                slug: location.slug(language),
                href: prefixed_path(language, &format!("/locations/{}", location.id)),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn navigation(language: Language) -> Vec<NavLink> {
    [
        ("nav.home", "/"),
        ("nav.services", "/services"),
        ("nav.locations", "/locations"),
        ("nav.contact", "/contact"),
    ]
    .into_iter()
    .map(|(key, path)| NavLink {
        label: translate(key, language.code()),
        href: prefixed_path(language, path),
    })
    .collect()
}
