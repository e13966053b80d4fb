//! Revstream Collector - HTTP ingress for revenue events.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revstream_collector::{create_router, AppState, CollectorConfig};
use revstream_store::{DbConfig, PgRevenueStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,revstream=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Revstream Collector");

    let config = CollectorConfig::from_env();
    let db_config = DbConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        server_events_file = %config.server_events_file,
        db_host = %db_config.host,
        db_name = %db_config.database,
        "Service configuration loaded"
    );

    let store = PgRevenueStore::connect_lazy(&db_config);

    // Best effort: the query endpoint needs the table, but the collector can
    // still ingest events while the database is unreachable.
    if let Err(e) = store.init_schema().await {
        tracing::warn!(error = %e, "Could not initialize schema; balance queries will fail until the database is reachable");
    }

    let state = AppState::new(Arc::new(store), config.clone());
    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
