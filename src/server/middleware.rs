//! Language redirect middleware.

use crate::negotiation::{resolve, Resolution};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Redirect requests without a language prefix to their negotiated language.
///
/// On pass-through the resolved [`Language`](crate::i18n::Language) is stored
/// in the request extensions. Language-prefixed paths with a trailing slash
/// (`/de/`) are permanently redirected to the same path without it.
pub async fn language_redirect(mut request: Request, next: Next) -> Response {
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let resolution = resolve(request.uri().path(), accept_language);

    match resolution {
        Resolution::Bypass => next.run(request).await,
        Resolution::Pass { language } => {
            if let Some(location) = without_trailing_slash(request.uri()) {
                debug!(
                    from = %request.uri().path(),
                    to = %location,
                    "Removing trailing slash"
                );
                return Redirect::permanent(&location).into_response();
            }
            request.extensions_mut().insert(language);
            next.run(request).await
        }
        Resolution::Redirect { location, language } => {
            let location = match request.uri().query() {
                Some(query) => format!("{}?{}", location, query),
                None => location,
            };
            debug!(
                from = %request.uri().path(),
                to = %location,
                language = %language,
                "Redirecting to language prefix"
            );

            let mut response = Redirect::temporary(&location).into_response();
            response
                .headers_mut()
                .insert(header::VARY, HeaderValue::from_static("accept-language"));
            response
        }
    }
}

/// The request target with trailing slashes removed from the path, or `None`
/// if the path has none to remove.
fn without_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    let trimmed = path.trim_end_matches('/');
    Some(match uri.query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed.to_string(),
    })
}
