//! Revstream Reconciler - folds the event log into user balances.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revstream_reconciler::{Reconciler, ReconcilerConfig};
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

    tracing::info!("Starting Revstream Reconciler");

    let config = ReconcilerConfig::from_env();
    let db_config = DbConfig::from_env();

    tracing::info!(
        server_events_file = %config.server_events_file,
        processed_suffix = %config.processed_suffix,
        db_host = %db_config.host,
        db_name = %db_config.database,
        "Configuration loaded"
    );

    let store = PgRevenueStore::connect_lazy(&db_config);
    store.init_schema().await?;

    let reconciler = Reconciler::new(Arc::new(store), &config);
    let report = reconciler.run().await?;

    if report.is_noop() {
        tracing::info!("Nothing to reconcile");
    } else {
        for file in &report.files {
            tracing::info!(
                archive = %file.archive.display(),
                users = file.users,
                events = file.events,
                skipped = file.skipped,
                "Reconciled"
            );
        }
    }

    Ok(())
}
