use anyhow::Result;
use grait_site::config::Config;
use grait_site::i18n::{CatalogValidator, TranslationTable};
use grait_site::server::{self, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("grait_site=info".parse()?),
        )
        .init();

    info!("Starting grait.io site server");

    let config = Config::from_env()?;
    info!("Site URL: {}", config.site_url);

    check_catalogs();

    server::serve(AppState::new(config)).await
}

/// Report gaps in the translation tables. Gaps are served with fallbacks, so
/// this never stops startup.
fn check_catalogs() {
    for table in [TranslationTable::messages(), TranslationTable::slugs()] {
        let report = CatalogValidator::validate(table);

        for message in &report.errors {
            error!("{}", message);
        }
        for message in &report.warnings {
            warn!("{}", message);
        }

        if report.is_clean() {
            info!("✓ {} table complete ({} keys)", table.name(), table.keys().len());
        }
    }
}
