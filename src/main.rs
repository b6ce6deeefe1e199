//! fyyur server entry point.
//!
//! Loads configuration, opens the store, and serves the listing pages.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use fyyur::api;
use fyyur::app_state::AppState;
use fyyur::config::{ListingsConfig, LogFormat};
use fyyur::persistence::{InMemoryStore, ListingStore, PostgresStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ListingsConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting fyyur");

    // Build persistence layer
    let store: Arc<dyn ListingStore> = if config.persistence_enabled {
        let store = PostgresStore::connect(&config)
            .await
            .context("connecting to the database")?;
        if config.run_migrations {
            store.migrate().await.context("running migrations")?;
            tracing::info!("migrations applied");
        }
        Arc::new(store)
    } else {
        tracing::warn!("persistence disabled, listings are kept in memory");
        Arc::new(InMemoryStore::new())
    };

    let app = api::build_app(
        AppState::new(store),
        Duration::from_secs(config.request_timeout_secs),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
