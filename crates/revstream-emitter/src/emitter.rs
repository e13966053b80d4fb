//! The emitter: drain a JSONL source and deliver events to the collector.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use revstream_core::Event;

use crate::batch::BatchGate;
use crate::config::EmitterConfig;
use crate::error::EmitterError;

/// Timeout applied to each delivery request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one delivery attempt.
#[derive(Debug)]
enum Delivery {
    /// The collector accepted the event.
    Accepted,
    /// The collector answered with a non-success status.
    Rejected { status: u16, body: String },
    /// The request never produced a response.
    Failed(reqwest::Error),
}

/// Counters for one emitter run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitterStats {
    /// Events the collector accepted.
    pub delivered: u64,
    /// Valid events whose delivery failed (bad status or transport error).
    /// Never retried.
    pub failed: u64,
    /// Source lines dropped before dispatch as malformed.
    pub skipped: u64,
}

/// Reads a newline-delimited event source and relays well-formed events to
/// the collector with bounded concurrency.
#[derive(Debug, Clone)]
pub struct Emitter {
    client: Client,
    base_url: String,
    secret: String,
    max_in_flight: usize,
}

impl Emitter {
    /// Build an emitter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EmitterError::Configuration`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &EmitterConfig) -> Result<Self, EmitterError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmitterError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            secret: config.secret.clone(),
            max_in_flight: config.max_concurrent_requests,
        })
    }

    /// Drain the source file at `path`.
    ///
    /// Each line is decoded; malformed lines are logged and skipped. Valid
    /// events are posted to `/liveEvent` in strictly sequential batches of
    /// at most `max_concurrent_requests`. The final partial batch is awaited
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns [`EmitterError::Source`] if the source cannot be opened or a
    /// read fails; individual delivery failures are counted, not raised.
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<EmitterStats, EmitterError> {
        let file = File::open(path.as_ref()).await?;
        let mut lines = BufReader::new(file).lines();

        let mut stats = EmitterStats::default();
        let mut gate = BatchGate::new(self.max_in_flight);

        while let Some(line) = lines.next_line().await? {
            match Event::parse(&line) {
                Ok(event) => {
                    gate.push(self.deliver(event));
                    if gate.is_full() {
                        settle(gate.drain().await, &mut stats);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, line = %line, "Skipping invalid event");
                    stats.skipped += 1;
                }
            }
        }

        // Flush the partial final batch.
        if !gate.is_empty() {
            settle(gate.drain().await, &mut stats);
        }

        tracing::info!(
            delivered = stats.delivered,
            failed = stats.failed,
            skipped = stats.skipped,
            "Emitter run complete"
        );
        Ok(stats)
    }

    /// Post one event to the collector's ingress endpoint.
    async fn deliver(&self, event: Event) -> Delivery {
        let url = format!("{}/liveEvent", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.secret)
            .json(&event)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => Delivery::Accepted,
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                Delivery::Rejected { status, body }
            }
            Err(err) => Delivery::Failed(err),
        }
    }
}

/// Inspect every settled delivery in a batch; failures are logged but never
/// abort the run.
fn settle(outcomes: Vec<Delivery>, stats: &mut EmitterStats) {
    for outcome in outcomes {
        match outcome {
            Delivery::Accepted => stats.delivered += 1,
            Delivery::Rejected { status, body } => {
                tracing::error!(status, body = %body, "Error in liveEvent request");
                stats.failed += 1;
            }
            Delivery::Failed(err) => {
                tracing::error!(error = %err, "liveEvent request failed");
                stats.failed += 1;
            }
        }
    }
}
