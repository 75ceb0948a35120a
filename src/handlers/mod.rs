//! View Controller
//!
//! One handler per UI event. Handlers either mutate the dashboard store
//! directly or make a single bridge call and render its outcome. Nothing
//! here touches the DOM.

mod auth;
mod crew;
mod local;
mod projects;
mod system;
mod team;

#[cfg(test)]
mod mock;

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::models::{NoticeLevel, OutputSlot};
use crate::render::{redact, render_value};
use crate::store::{store_apply_output, store_issue_token, store_push_notice, DashboardStore};

pub use auth::{login, logout};
pub use crew::submit_prompt;
pub use local::{
    create_new_project, create_new_task, handle_action, navigate, open_notifications,
    open_user_settings, perform_search,
};
pub use projects::{refresh_files, refresh_projects, select_project};
pub use system::{refresh_system_status, toggle_status_panel};
pub use team::{assign_task, refresh_employees, send_chat_message, update_task_status};

/// Log a failed call and surface it in the notice tray. No retry.
fn report_failure(store: &DashboardStore, procedure: &str, err: &BridgeError) {
    tracing::warn!(procedure, error = %redact(&err.to_string()), "remote call failed");
    store_push_notice(store, NoticeLevel::Error, format!("{procedure} failed: {err}"));
}

/// Empty required field: warn and skip the call
fn require(store: &DashboardStore, value: &str, field: &str) -> bool {
    if value.trim().is_empty() {
        store_push_notice(store, NoticeLevel::Warning, format!("{field} is required"));
        return false;
    }
    true
}

/// Run a call whose result is not displayed
async fn fire<F>(store: &DashboardStore, procedure: &str, call: F) -> Option<Value>
where
    F: std::future::Future<Output = BridgeResult<Value>>,
{
    match call.await {
        Ok(value) => Some(value),
        Err(err) => {
            report_failure(store, procedure, &err);
            None
        }
    }
}

/// Run a call and render its result into `slot`, unless a newer call for
/// the same slot was started meanwhile
async fn fetch_into<F>(store: &DashboardStore, slot: OutputSlot, procedure: &str, call: F) -> bool
where
    F: std::future::Future<Output = BridgeResult<Value>>,
{
    let token = store_issue_token(store, slot);
    match call.await {
        Ok(value) => {
            let applied = store_apply_output(store, token, render_value(&value));
            if !applied {
                tracing::debug!(procedure, seq = token.seq, "dropping superseded response");
            }
            applied
        }
        Err(err) => {
            report_failure(store, procedure, &err);
            false
        }
    }
}
