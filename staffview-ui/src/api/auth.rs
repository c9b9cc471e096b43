//! Authentication middleware
//!
//! Protected routes carry two headers: `x-auth-timestamp` (Unix epoch
//! milliseconds) and `x-auth-hash` (SHA-256 of `timestamp:path:secret`).
//! Validation itself is pure and lives in the common crate; this middleware
//! only extracts the headers. A shared secret of 0 disables all checking.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::warn;

use staffview_common::api::auth::{validate_hash, validate_timestamp};

use super::ApiError;
use crate::AppState;

const TIMESTAMP_HEADER: &str = "x-auth-timestamp";
const HASH_HEADER: &str = "x-auth-hash";

/// Authentication middleware for all /api routes.
///
/// Returns 401 on a stale timestamp or hash mismatch, 400 when the headers
/// are missing or unreadable.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Secret 0 disables ALL auth checking.
    if state.shared_secret == 0 {
        return Ok(next.run(request).await);
    }

    let timestamp = header_i64(request.headers(), TIMESTAMP_HEADER)?;
    let hash = header_str(request.headers(), HASH_HEADER)?.to_string();
    let path = request.uri().path().to_string();

    let now = Utc::now().timestamp_millis();
    validate_timestamp(timestamp, now)
        .map_err(|err| ApiError::Unauthorized(err.to_string()))?;

    validate_hash(&hash, timestamp, &path, state.shared_secret).map_err(|err| {
        warn!(%path, "request hash validation failed");
        ApiError::Unauthorized(err.to_string())
    })?;

    Ok(next.run(request).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("missing or unreadable header: {name}")))
}

fn header_i64(headers: &HeaderMap, name: &str) -> Result<i64, ApiError> {
    header_str(headers, name)?
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("header {name} is not an integer")))
}
