//! HTTP API handlers for staffview-ui

pub mod auth;
pub mod bookmarks;
pub mod employees;
pub mod health;
pub mod notifications;
pub mod stats;

pub use auth::auth_middleware;
pub use bookmarks::{list_bookmarks, toggle_bookmark};
pub use employees::{create_employee, employee_profile, list_employees, refresh_feed};
pub use health::health_routes;
pub use notifications::{
    list_notifications, mark_all_notifications_read, mark_notification_read, remove_notification,
};
pub use stats::{get_department_stats, get_overview, get_rating_distribution, get_trend_series};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error responses
///
/// Every failure surfaces as `{"error": ...}` with the matching status
/// code; nothing in the handlers panics or leaks internals.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    /// An explicitly requested re-fetch failed (state still fell back)
    UpstreamFailure(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UpstreamFailure(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
