//! Event ingress handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use revstream_core::Event;

use crate::auth::SecretAuth;
use crate::error::ApiError;
use crate::state::AppState;

/// Acknowledgement for an accepted event.
#[derive(Debug, Serialize)]
pub struct LiveEventResponse {
    /// Always "accepted".
    pub status: String,
}

/// `POST /liveEvent` - authenticate, validate, append.
///
/// The `SecretAuth` extractor rejects unauthenticated requests before the
/// body is read. The body is decoded with the shared event schema; a
/// malformed payload yields 400 and writes nothing. A valid event is
/// appended to the active log as one complete JSON line.
pub async fn live_event(
    State(state): State<Arc<AppState>>,
    _auth: SecretAuth,
    body: Bytes,
) -> Result<Json<LiveEventResponse>, ApiError> {
    let raw = std::str::from_utf8(&body)
        .map_err(|_| ApiError::BadRequest("request body is not valid UTF-8".into()))?;

    let event = Event::parse(raw).map_err(|err| {
        tracing::debug!(error = %err, "Rejecting invalid event");
        ApiError::BadRequest(format!("invalid event: {err}"))
    })?;

    tracing::debug!(user_id = %event.user_id, name = ?event.name, value = event.value, "Event received");
    state.log.append(&event).await?;

    Ok(Json(LiveEventResponse {
        status: "accepted".to_string(),
    }))
}
