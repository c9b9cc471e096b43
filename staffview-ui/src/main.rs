//! staffview-ui - StaffView dashboard backend
//!
//! Holds the session store (employees, bookmarks, notifications) in memory,
//! enriches records from the external feed, and serves the dashboard's
//! JSON API. Falls back to a locally generated dataset when the feed is
//! unreachable, so the dashboard is never empty.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;

use staffview_common::notify::seed_notifications;
use staffview_common::store::Store;
use staffview_ui::config::{CliArgs, UiConfig};
use staffview_ui::source::{refresh_employees, HttpRecordSource};
use staffview_ui::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting StaffView UI (staffview-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = CliArgs::parse();
    let config = UiConfig::resolve(&cli);
    info!(
        feed_url = %config.feed_url,
        feed_limit = config.feed_limit,
        "record feed configured"
    );
    if config.shared_secret == 0 {
        info!("API authentication disabled (shared_secret = 0)");
    } else {
        info!("API authentication enabled");
    }

    let source = Arc::new(HttpRecordSource::new(
        config.feed_url.clone(),
        config.feed_limit,
    ));
    let store = Store::with_notifications(seed_notifications(Utc::now()));
    let state = AppState::new(store, source, config.shared_secret);

    // Initial fetch runs in the background; the API serves immediately with
    // loading=true until the outcome lands (fallback on failure).
    {
        let state = state.clone();
        tokio::spawn(async move {
            refresh_employees(&state).await;
        });
    }

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("staffview-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
