//! Local Handlers
//!
//! Handlers that only record intent or touch view state. No bridge calls.

use leptos::prelude::*;

use crate::models::{DashboardView, NoticeLevel};
use crate::render::{decrement_counter, redact};
use crate::store::{store_push_notice, DashboardStore, DashboardStateStoreFields};

/// Record a simulated action and show it in the notice tray
pub fn handle_action(store: DashboardStore, action: &str) {
    let action = redact(action);
    tracing::info!(action = %action, "action triggered");
    store_push_notice(&store, NoticeLevel::Info, format!("Action: {action} simulated."));
}

pub fn navigate(store: DashboardStore, view: DashboardView) {
    tracing::info!(destination = view.label(), "navigate");
    store.current_view().set(view);
}

pub fn create_new_project(_store: DashboardStore) {
    tracing::info!(entity = "project", "create requested");
}

pub fn create_new_task(_store: DashboardStore) {
    tracing::info!(entity = "task", "create requested");
}

pub fn perform_search(store: DashboardStore, query: &str) {
    tracing::info!(query = %redact(query), "search");
    store.last_search().set(Some(query.to_string()));
}

/// Reading notifications consumes one; the badge never goes below zero
pub fn open_notifications(store: DashboardStore) {
    let next = decrement_counter(store.notification_count().get_untracked());
    store.notification_count().set(next);
    tracing::info!(remaining = next, "notifications opened");
}

pub fn open_user_settings(_store: DashboardStore) {
    tracing::info!("open user settings");
}
