//! Live record feed client
//!
//! Fetches raw person records from a dummyjson-compatible endpoint and
//! feeds them through the common ingest path. The fetch is the only
//! suspension point in the refresh flow; the store lock is never held
//! across it.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use staffview_common::employee::{Address, RawPerson};
use staffview_common::error::{Error, Result};
use staffview_common::feed::{apply_fetch_outcome, RecordSource};
use staffview_common::store::Action;

use crate::AppState;

/// Timeout for record feed requests
const FEED_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("StaffView-UI/", env!("CARGO_PKG_VERSION"));

/// HTTP record source against a dummyjson-style `/users` endpoint
pub struct HttpRecordSource {
    http_client: Client,
    feed_url: String,
    limit: usize,
}

impl HttpRecordSource {
    pub fn new(feed_url: impl Into<String>, limit: usize) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(FEED_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            feed_url: feed_url.into(),
            limit,
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<RawPerson>> {
        let url = format!("{}?limit={}", self.feed_url, self.limit);
        debug!(%url, "fetching employee records");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Fetch(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "record feed returned HTTP {}",
                response.status()
            )));
        }

        let feed: FeedResponse = response
            .json()
            .await
            .map_err(|err| Error::Fetch(format!("invalid feed payload: {err}")))?;

        Ok(feed.users.into_iter().map(RawPerson::from).collect())
    }
}

/// Refresh the employee list from the configured record source.
///
/// Loading/error flags flip synchronously before the fetch; the outcome
/// (including fallback generation on failure) lands synchronously after it.
/// Concurrent refreshes are last-writer-wins.
pub async fn refresh_employees(state: &AppState) {
    {
        let mut store = state.store.write().unwrap();
        store.dispatch(Action::SetLoading(true));
        store.dispatch(Action::SetError(None));
    }

    let outcome = state.source.fetch_records().await;

    let today = Utc::now().date_naive();
    let mut store = state.store.write().unwrap();
    apply_fetch_outcome(&mut store, outcome, today);
}

/// Wire shape of the upstream feed. Treated as untrusted: every field is
/// optional or defaulted, and records without an id surface as id 0, which
/// the enricher rejects.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    users: Vec<FeedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedUser {
    id: Option<i64>,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    age: u32,
    #[serde(default)]
    address: FeedAddress,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedAddress {
    /// dummyjson calls the street line "address"
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    postal_code: String,
}

impl From<FeedUser> for RawPerson {
    fn from(user: FeedUser) -> Self {
        RawPerson {
            id: user.id.unwrap_or(0),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            age: user.age,
            address: Address {
                street: user.address.address,
                city: user.address.city,
                state: user.address.state,
                zip: user.address.postal_code,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_payload_parses_and_maps() {
        let payload = r#"{
            "users": [
                {
                    "id": 1,
                    "firstName": "Emily",
                    "lastName": "Johnson",
                    "email": "emily.johnson@x.dummyjson.com",
                    "phone": "+81 965-431-3024",
                    "age": 28,
                    "address": {
                        "address": "626 Main Street",
                        "city": "Phoenix",
                        "state": "Mississippi",
                        "postalCode": "29112"
                    }
                },
                { "firstName": "No", "lastName": "Id" }
            ],
            "total": 2
        }"#;

        let feed: FeedResponse = serde_json::from_str(payload).unwrap();
        let records: Vec<RawPerson> = feed.users.into_iter().map(RawPerson::from).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].address.city, "Phoenix");
        assert_eq!(records[0].address.zip, "29112");
        // Missing id maps to 0, which the enricher rejects downstream.
        assert_eq!(records[1].id, 0);
    }
}
