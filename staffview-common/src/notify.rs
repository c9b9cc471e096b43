//! Notification entities and seed data
//!
//! Notifications are created once at store initialization; afterwards the
//! only transitions are unread -> read (monotonic) and removal (permanent).
//! The transitions themselves are store actions, see `store`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity/flavor of a notification entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
}

/// A single notification entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
}

impl Notification {
    /// Create an unread notification stamped at `time`.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            time,
            kind,
            read: false,
        }
    }
}

/// The notification set a fresh session starts with. All entries unread.
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationKind::Success,
            "New hire onboarded",
            "Alexis Nguyen completed onboarding and joined Engineering.",
            now - Duration::hours(2),
        ),
        Notification::new(
            NotificationKind::Info,
            "Review cycle opens Monday",
            "Quarterly performance reviews open for all departments next week.",
            now - Duration::days(1),
        ),
        Notification::new(
            NotificationKind::Warning,
            "Promotions awaiting approval",
            "Three promotion requests have been waiting for more than five days.",
            now - Duration::days(3),
        ),
    ]
}
