//! Bookmark listing and toggling

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use staffview_common::employee::Employee;
use staffview_common::query::{sort_employees, SortKey};
use staffview_common::store::Action;

use super::ApiError;
use crate::AppState;

/// Query parameters for the bookmark list
#[derive(Debug, Deserialize)]
pub struct BookmarkListQuery {
    /// One of name, rating, department, recent
    pub sort: Option<String>,
}

/// Bookmark list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkListResponse {
    /// Bookmarked ids, including orphans whose employee is gone
    pub bookmarked: usize,
    pub employees: Vec<Employee>,
}

/// GET /api/bookmarks?sort=
///
/// Hydrates bookmarked ids against the current employee list. Orphaned ids
/// stay in the set but produce no row.
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(query): Query<BookmarkListQuery>,
) -> Result<Json<BookmarkListResponse>, ApiError> {
    let sort = match query.sort.as_deref() {
        None => None,
        Some(value) => Some(
            SortKey::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown sort key: {value}")))?,
        ),
    };

    let store = state.store.read().unwrap();
    let snapshot = store.state();
    let mut employees: Vec<Employee> = snapshot
        .employees
        .iter()
        .filter(|e| snapshot.bookmarks.contains(&e.id))
        .cloned()
        .collect();
    if let Some(key) = sort {
        sort_employees(&mut employees, key);
    }

    Ok(Json(BookmarkListResponse {
        bookmarked: snapshot.bookmarks.len(),
        employees,
    }))
}

/// Toggle outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookmarkResponse {
    pub id: i64,
    pub bookmarked: bool,
}

/// POST /api/bookmarks/:id/toggle
///
/// Inserts or removes the id from the bookmark set. The id does not have to
/// reference a currently listed employee.
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToggleBookmarkResponse>, ApiError> {
    if id < 1 {
        return Err(ApiError::BadRequest(format!(
            "employee id must be a positive integer, got {id}"
        )));
    }

    let mut store = state.store.write().unwrap();
    store.dispatch(Action::ToggleBookmark(id));

    Ok(Json(ToggleBookmarkResponse {
        id,
        bookmarked: store.is_bookmarked(id),
    }))
}
