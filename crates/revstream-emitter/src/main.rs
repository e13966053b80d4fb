//! Revstream Emitter - relays revenue events to the collector.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revstream_emitter::{Emitter, EmitterConfig};

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

    let config = EmitterConfig::from_env();

    tracing::info!(
        events_file = %config.events_file,
        server_url = %config.server_url,
        max_concurrent_requests = config.max_concurrent_requests,
        "Starting to generate events"
    );

    let emitter = Emitter::new(&config)?;
    let stats = emitter.run(&config.events_file).await?;

    tracing::info!(
        delivered = stats.delivered,
        failed = stats.failed,
        skipped = stats.skipped,
        "Finished generating events"
    );

    Ok(())
}
