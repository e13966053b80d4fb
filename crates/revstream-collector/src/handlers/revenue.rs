//! User revenue query handler.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use revstream_core::{UserId, UserRevenue};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /userEvents/:userid` - look up a user's aggregated balance.
pub async fn user_events(
    State(state): State<Arc<AppState>>,
    Path(userid): Path<String>,
) -> Result<Json<UserRevenue>, ApiError> {
    if userid.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "user id should exist and must be a non-empty string".into(),
        ));
    }

    let user_id: UserId = userid
        .parse()
        .map_err(|_| ApiError::BadRequest("user id should exist and must be a non-empty string".into()))?;

    let row = state.store.get_user_revenue(&user_id).await?;

    row.map(Json)
        .ok_or_else(|| ApiError::NotFound("user not found".into()))
}
