//! Analytics aggregates

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use staffview_common::stats::{
    department_stats, overview, rating_distribution, trend_series, DepartmentStats,
    OverviewStats, TrendPoint,
};

use crate::AppState;

/// GET /api/stats/departments
pub async fn get_department_stats(State(state): State<AppState>) -> Json<Vec<DepartmentStats>> {
    let store = state.store.read().unwrap();
    let snapshot = store.state();
    Json(department_stats(&snapshot.employees, &snapshot.bookmarks))
}

/// GET /api/stats/distribution
///
/// Whole-star rating buckets 1..=5, zero-filled.
pub async fn get_rating_distribution(
    State(state): State<AppState>,
) -> Json<BTreeMap<u8, usize>> {
    let store = state.store.read().unwrap();
    Json(rating_distribution(store.employees()))
}

/// Query parameters for the trend series
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub months: Option<usize>,
}

/// GET /api/stats/trends?months=
///
/// Synthesized placeholder series (the session store has no real history);
/// the month count is clamped into 1..=12 and defaults to 6.
pub async fn get_trend_series(Query(query): Query<TrendQuery>) -> Json<Vec<TrendPoint>> {
    let months = query.months.unwrap_or(6).clamp(1, 12);
    Json(trend_series(months))
}

/// GET /api/stats/overview
pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewStats> {
    let store = state.store.read().unwrap();
    let snapshot = store.state();
    Json(overview(&snapshot.employees, &snapshot.bookmarks))
}
