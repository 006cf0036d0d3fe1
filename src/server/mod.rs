//! HTTP host for the language resolver and the translation tables.

pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::{ApiResponse, AppError, AppState};

use anyhow::{Context, Result};
use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(page_routes())
        .fallback(fallback_handler)
        .with_state(state)
        // Added after the fallback so unmatched paths are redirected too
        .layer(axum::middleware::from_fn(middleware::language_redirect))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/translate", get(handlers::translate_handler))
        .route("/translations/:lang", get(handlers::translations_handler))
        .route("/alternates", get(handlers::alternates_handler))
        .route("/metrics", get(handlers::metrics_handler))
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/:lang", get(handlers::home_page_handler))
        .route("/:lang/*rest", get(handlers::page_handler))
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState) -> Result<()> {
    let address = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
