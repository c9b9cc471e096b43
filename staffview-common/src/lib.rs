//! # StaffView Common Library
//!
//! The reactive record store and derived-view engine behind the StaffView
//! dashboard:
//! - Employee model and deterministic enrichment (id-seeded derivation)
//! - In-memory store with a fixed action-dispatch interface
//! - Pure query and aggregation functions over store snapshots
//! - Notification entities and transitions
//! - Record-feed seam with a deterministic local fallback
//! - Request authentication primitives

pub mod api;
pub mod employee;
pub mod enrich;
pub mod error;
pub mod feed;
pub mod notify;
pub mod query;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
