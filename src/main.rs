use anyhow::{Context, Result};
use locale_router::{config, i18n::LanguageRegistry, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_router=info".parse()?),
        )
        .init();

    let config = Arc::new(config::Config::from_env()?);

    let locales: Vec<_> = LanguageRegistry::get()
        .list_all()
        .iter()
        .map(|lang| lang.locale.code())
        .collect();
    info!(
        "Serving locales [{}] (default: {})",
        locales.join(", "),
        LanguageRegistry::get().default_language().locale
    );

    let app = server::router(Arc::clone(&config));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
