//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{events, health, revenue};
use crate::state::AppState;

/// Maximum concurrent requests on the ingress endpoint. Protects the append
/// path from overload during high-volume emission.
const INGRESS_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `GET /userEvents/:userid` - Aggregated balance for a user
///
/// ## Authenticated (shared secret)
/// - `POST /liveEvent` - Ingest one revenue event
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let ingress = Router::new()
        .route("/liveEvent", post(events::live_event))
        .layer(ConcurrencyLimitLayer::new(INGRESS_MAX_CONCURRENT_REQUESTS));

    Router::new()
        .route("/health", get(health::health))
        .route("/userEvents/:userid", get(revenue::user_events))
        .merge(ingress)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
