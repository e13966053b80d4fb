//! Authentication extractor.
//!
//! Ingress requests authenticate with a shared secret passed verbatim in
//! the `Authorization` header; anything but a byte-exact match is rejected
//! before the request body is touched.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured shared secret.
#[derive(Debug, Clone, Copy)]
pub struct SecretAuth;

#[async_trait]
impl FromRequestParts<Arc<AppState>> for SecretAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        if token != state.config.secret {
            return Err(ApiError::Unauthorized);
        }

        Ok(Self)
    }
}
