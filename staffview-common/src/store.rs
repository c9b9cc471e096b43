//! In-memory application store
//!
//! Holds the normalized session state (employees, bookmarks, notifications,
//! query parameters, loading/error flags) behind a fixed action-dispatch
//! interface. Every mutation is synchronous, runs to completion, and
//! performs no I/O; consumers only ever see the state before or after a
//! whole action. Actions carrying ids that match nothing are silent no-ops,
//! never errors.

use std::collections::HashSet;

use uuid::Uuid;

use crate::employee::Employee;
use crate::notify::Notification;

/// Normalized session state, exclusively owned by a [`Store`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Enriched employee list in feed order
    pub employees: Vec<Employee>,
    /// Bookmarked employee ids. May contain ids of employees no longer in
    /// `employees` after a wholesale replacement; orphans are tolerated and
    /// never pruned.
    pub bookmarks: HashSet<i64>,
    /// Notification entries in seed order
    pub notifications: Vec<Notification>,
    pub search_term: String,
    pub filter_department: String,
    pub filter_rating: String,
    pub loading: bool,
    pub error: Option<String>,
}

/// The closed set of store mutations.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the employee list wholesale. Bookmarks and notifications are
    /// untouched.
    SetEmployees(Vec<Employee>),
    SetLoading(bool),
    SetError(Option<String>),
    SetSearchTerm(String),
    SetFilterDepartment(String),
    SetFilterRating(String),
    /// Insert the id if absent, remove it if present. Toggling twice
    /// restores the original membership.
    ToggleBookmark(i64),
    MarkNotificationRead(Uuid),
    MarkAllNotificationsRead,
    /// Permanent for the session; no tombstone is kept.
    RemoveNotification(Uuid),
}

/// Owner of the session [`AppState`].
///
/// All mutation goes through [`Store::dispatch`]; reads go through the
/// snapshot accessors. There is deliberately no ambient singleton: callers
/// hold the store explicitly.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Empty store: no employees, no bookmarks, no notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a notification seed set.
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            state: AppState {
                notifications,
                ..AppState::default()
            },
        }
    }

    /// Apply one action. Never fails; actions referencing unknown ids leave
    /// the state unchanged.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetEmployees(employees) => self.state.employees = employees,
            Action::SetLoading(loading) => self.state.loading = loading,
            Action::SetError(error) => self.state.error = error,
            Action::SetSearchTerm(term) => self.state.search_term = term,
            Action::SetFilterDepartment(department) => {
                self.state.filter_department = department;
            }
            Action::SetFilterRating(rating) => self.state.filter_rating = rating,
            Action::ToggleBookmark(id) => {
                if !self.state.bookmarks.remove(&id) {
                    self.state.bookmarks.insert(id);
                }
            }
            Action::MarkNotificationRead(id) => {
                if let Some(entry) = self.state.notifications.iter_mut().find(|n| n.id == id) {
                    entry.read = true;
                }
            }
            Action::MarkAllNotificationsRead => {
                for entry in &mut self.state.notifications {
                    entry.read = true;
                }
            }
            Action::RemoveNotification(id) => {
                self.state.notifications.retain(|n| n.id != id);
            }
        }
    }

    /// Read-only snapshot of the whole state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    pub fn is_bookmarked(&self, id: i64) -> bool {
        self.state.bookmarks.contains(&id)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        self.state.notifications.iter().filter(|n| !n.read).count()
    }
}
