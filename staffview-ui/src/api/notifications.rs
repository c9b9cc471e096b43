//! Notification listing and lifecycle transitions

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use staffview_common::notify::Notification;
use staffview_common::store::Action;

use super::ApiError;
use crate::AppState;

/// Notification list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    pub count: usize,
    pub unread: usize,
    pub notifications: Vec<Notification>,
}

/// GET /api/notifications
pub async fn list_notifications(State(state): State<AppState>) -> Json<NotificationListResponse> {
    let store = state.store.read().unwrap();
    Json(NotificationListResponse {
        count: store.notifications().len(),
        unread: store.unread_notifications(),
        notifications: store.notifications().to_vec(),
    })
}

/// Read/remove outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdateResponse {
    pub count: usize,
    pub unread: usize,
}

/// POST /api/notifications/:id/read
///
/// Marks the entry read. Already-read entries stay read.
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationUpdateResponse>, ApiError> {
    let mut store = state.store.write().unwrap();
    if !store.notifications().iter().any(|n| n.id == id) {
        return Err(ApiError::NotFound(format!("no notification with id {id}")));
    }
    store.dispatch(Action::MarkNotificationRead(id));

    Ok(Json(NotificationUpdateResponse {
        count: store.notifications().len(),
        unread: store.unread_notifications(),
    }))
}

/// POST /api/notifications/read-all
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
) -> Json<NotificationUpdateResponse> {
    let mut store = state.store.write().unwrap();
    store.dispatch(Action::MarkAllNotificationsRead);

    Json(NotificationUpdateResponse {
        count: store.notifications().len(),
        unread: store.unread_notifications(),
    })
}

/// DELETE /api/notifications/:id
///
/// Removal is permanent for the session.
pub async fn remove_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationUpdateResponse>, ApiError> {
    let mut store = state.store.write().unwrap();
    if !store.notifications().iter().any(|n| n.id == id) {
        return Err(ApiError::NotFound(format!("no notification with id {id}")));
    }
    store.dispatch(Action::RemoveNotification(id));

    Ok(Json(NotificationUpdateResponse {
        count: store.notifications().len(),
        unread: store.unread_notifications(),
    }))
}
