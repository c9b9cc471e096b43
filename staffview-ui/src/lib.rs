//! staffview-ui library - dashboard backend service
//!
//! Serves the StaffView consumer API over an in-memory store: employee
//! listing and detail, bookmark toggling, notification lifecycle, and the
//! analytics aggregates. Rendering is the frontend's concern; this service
//! only answers JSON.

use std::sync::{Arc, RwLock};

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use staffview_common::feed::RecordSource;
use staffview_common::store::Store;

pub mod api;
pub mod config;
pub mod source;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Session store. Read-frequently, write-rarely; no handler holds the
    /// lock across an await.
    pub store: Arc<RwLock<Store>>,
    /// Record feed collaborator
    pub source: Arc<dyn RecordSource>,
    /// Shared secret for API authentication (0 disables auth)
    pub shared_secret: i64,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Store, source: Arc<dyn RecordSource>, shared_secret: i64) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            source,
            shared_secret,
        }
    }
}

/// Build application router
///
/// Health endpoint is public; everything under /api requires authentication
/// unless the shared secret is 0.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/employees",
            get(api::list_employees).post(api::create_employee),
        )
        .route("/api/employees/refresh", post(api::refresh_feed))
        .route("/api/employees/:id", get(api::employee_profile))
        .route("/api/bookmarks", get(api::list_bookmarks))
        .route("/api/bookmarks/:id/toggle", post(api::toggle_bookmark))
        .route("/api/notifications", get(api::list_notifications))
        .route(
            "/api/notifications/read-all",
            post(api::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/:id/read",
            post(api::mark_notification_read),
        )
        .route("/api/notifications/:id", delete(api::remove_notification))
        .route("/api/stats/departments", get(api::get_department_stats))
        .route("/api/stats/distribution", get(api::get_rating_distribution))
        .route("/api/stats/trends", get(api::get_trend_series))
        .route("/api/stats/overview", get(api::get_overview))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    let public = api::health_routes();

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
