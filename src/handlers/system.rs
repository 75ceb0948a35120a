//! System Status Handlers
//!
//! The header status dropdown and the full system status panel.

use leptos::prelude::*;

use super::{fetch_into, report_failure};
use crate::bridge::DashboardBridge;
use crate::models::OutputSlot;
use crate::render::render_value;
use crate::store::{
    store_apply_output, store_is_current, store_issue_token, DashboardStateStoreFields,
    DashboardStore,
};

/// Close the dropdown if open; otherwise fetch status, render it and open.
///
/// A failed fetch still opens the dropdown with whatever it showed last.
/// Closing supersedes any fetch still in flight, so a late response cannot
/// reopen a dropdown the user already dismissed.
pub async fn toggle_status_panel<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    if store.status_panel().with_untracked(|panel| panel.open) {
        store.status_panel().write().open = false;
        store_issue_token(&store, OutputSlot::StatusPanel);
        return;
    }

    let token = store_issue_token(&store, OutputSlot::StatusPanel);
    match bridge.get_system_status().await {
        Ok(value) => {
            if store_apply_output(&store, token, render_value(&value)) {
                store.status_panel().write().open = true;
            }
        }
        Err(err) => {
            report_failure(&store, "get_system_status", &err);
            if store_is_current(&store, token) {
                store.status_panel().write().open = true;
            }
        }
    }
}

pub async fn refresh_system_status<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    fetch_into(&store, OutputSlot::SystemStatus, "get_system_status", bridge.get_system_status()).await;
}
