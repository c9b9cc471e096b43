//! Record feed seam and local fallback generation
//!
//! The external record feed is a collaborator behind the [`RecordSource`]
//! trait; the live HTTP client lives in the service crate. This module owns
//! everything that must keep working when that collaborator does not: the
//! deterministic fallback record generator and the synchronous ingest step
//! that lands a fetch outcome in the store.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::employee::{Address, RawPerson};
use crate::enrich::enrich_at;
use crate::error::Result;
use crate::store::{Action, Store};

/// Number of records synthesized when the feed is unavailable
pub const FALLBACK_RECORD_COUNT: usize = 20;

/// Supplier of raw person records.
///
/// The only operation that may suspend in the whole engine. Implementations
/// must not touch the store; ingest happens separately and synchronously via
/// [`apply_fetch_outcome`].
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<RawPerson>>;
}

/// Synthesize `count` raw records with placeholder contact fields.
///
/// Every field is a fixed function of the record index, so repeated
/// generation yields identical records and the enrichment downstream stays
/// reproducible.
pub fn fallback_records(count: usize) -> Vec<RawPerson> {
    const FIRST_NAMES: [&str; 10] = [
        "Ava", "Liam", "Maya", "Noah", "Zoe", "Ethan", "Ruby", "Owen", "Isla", "Caleb",
    ];
    const LAST_NAMES: [&str; 10] = [
        "Bennett", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Alvarez", "Novak", "Keller",
        "Osei", "Brennan",
    ];
    const CITIES: [&str; 10] = [
        "Portland", "Austin", "Denver", "Raleigh", "Madison", "Boise", "Savannah", "Tacoma",
        "Providence", "Lexington",
    ];
    const STATES: [&str; 10] = ["OR", "TX", "CO", "NC", "WI", "ID", "GA", "WA", "RI", "KY"];

    (1..=count)
        .map(|i| {
            let idx = i - 1;
            let first = FIRST_NAMES[idx % FIRST_NAMES.len()];
            let last = LAST_NAMES[(idx / LAST_NAMES.len() + idx) % LAST_NAMES.len()];
            RawPerson {
                id: i as i64,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!(
                    "{}.{}{}@staffview.dev",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i
                ),
                phone: format!("+1 555-01{:02}", i),
                age: 22 + ((i as u32 * 7) % 40),
                address: Address {
                    street: format!("{} Market Street", 100 + i * 10),
                    city: CITIES[idx % CITIES.len()].to_string(),
                    state: STATES[idx % STATES.len()].to_string(),
                    zip: format!("{:05}", 10_000 + i * 37),
                },
            }
        })
        .collect()
}

/// Land a fetch outcome in the store.
///
/// Runs synchronously to completion; callers invoke it after the fetch
/// resolves, with no lock held across the await. On success, each record is
/// enriched and individually invalid records are dropped without failing
/// the batch. On failure, the error is recorded as state AND the employee
/// list is populated from the enriched fallback set, so derived views are
/// never left empty. Either way the loading flag clears. A superseding
/// fetch simply overwrites this result (last-writer-wins).
pub fn apply_fetch_outcome(
    store: &mut Store,
    outcome: Result<Vec<RawPerson>>,
    today: NaiveDate,
) {
    match outcome {
        Ok(records) => {
            let mut employees = Vec::with_capacity(records.len());
            for record in &records {
                match enrich_at(record, today) {
                    Ok(employee) => employees.push(employee),
                    Err(err) => {
                        warn!(id = record.id, %err, "dropping invalid feed record");
                    }
                }
            }
            info!(count = employees.len(), "employee feed refreshed");
            store.dispatch(Action::SetEmployees(employees));
            store.dispatch(Action::SetError(None));
        }
        Err(err) => {
            warn!(%err, "employee feed unavailable, generating local fallback set");
            let employees = fallback_records(FALLBACK_RECORD_COUNT)
                .iter()
                .filter_map(|record| enrich_at(record, today).ok())
                .collect();
            store.dispatch(Action::SetEmployees(employees));
            store.dispatch(Action::SetError(Some(format!(
                "employee feed unavailable: {err}"
            ))));
        }
    }
    store.dispatch(Action::SetLoading(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn fallback_records_are_deterministic() {
        assert_eq!(fallback_records(20), fallback_records(20));
    }

    #[test]
    fn fallback_records_have_unique_ids_and_emails() {
        let records = fallback_records(FALLBACK_RECORD_COUNT);
        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        let emails: HashSet<_> = records.iter().map(|r| r.email.clone()).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(emails.len(), records.len());
    }

    #[test]
    fn fetch_failure_populates_fallback_set() {
        let mut store = Store::new();
        store.dispatch(Action::SetLoading(true));

        apply_fetch_outcome(
            &mut store,
            Err(Error::Fetch("connection refused".to_string())),
            day(),
        );

        let state = store.state();
        assert_eq!(state.employees.len(), FALLBACK_RECORD_COUNT);
        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn successful_fetch_clears_previous_error() {
        let mut store = Store::new();
        store.dispatch(Action::SetError(Some("stale".to_string())));

        apply_fetch_outcome(&mut store, Ok(fallback_records(5)), day());

        let state = store.state();
        assert_eq!(state.employees.len(), 5);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn invalid_records_are_dropped_individually() {
        let mut records = fallback_records(3);
        records[1].id = 0; // missing/non-numeric feed id lands here as 0

        let mut store = Store::new();
        apply_fetch_outcome(&mut store, Ok(records), day());

        assert_eq!(store.employees().len(), 2);
        assert!(store.state().error.is_none());
    }
}
