//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every piece of
//! view state the handlers share lives here instead of in element ids.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::DashboardConfig;
use crate::models::{DashboardView, Notice, NoticeLevel, OutputSlot, PanelState};
use crate::sequencer::{RequestToken, Sequencer};

/// Shared view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Section picked in the sidebar
    pub current_view: DashboardView,
    /// Crew status dropdown in the header
    pub status_panel: PanelState,
    /// Notification badge value
    pub notification_count: u32,
    pub prompt_response: Option<String>,
    pub employees_overview: Option<String>,
    pub projects_list: Option<String>,
    pub files_list: Option<String>,
    pub system_status: Option<String>,
    /// Project id field read by both select and file refresh
    pub selected_project_id: String,
    pub last_search: Option<String>,
    /// Username of the last successful login
    pub session_user: Option<String>,
    /// UI notification channel, oldest first
    pub notices: Vec<Notice>,
    pub next_notice_id: u64,
    pub max_notices: usize,
    pub sequencer: Sequencer,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            notification_count: config.initial_notifications,
            max_notices: config.max_notices.max(1),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a notice, dropping the oldest past the cap. Returns its id.
pub fn store_push_notice(store: &DashboardStore, level: NoticeLevel, message: impl Into<String>) -> u64 {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id + 1);

    let cap = store.max_notices().get_untracked().max(1);
    let notices_field = store.notices();
    let mut notices = notices_field.write();
    notices.push(Notice { id, level, message: message.into() });
    let overflow = notices.len().saturating_sub(cap);
    if overflow > 0 {
        notices.drain(..overflow);
    }
    id
}

/// Remove a notice by id
pub fn store_dismiss_notice(store: &DashboardStore, id: u64) {
    store.notices().write().retain(|notice| notice.id != id);
}

/// Start a request for `slot`, superseding earlier ones
pub fn store_issue_token(store: &DashboardStore, slot: OutputSlot) -> RequestToken {
    store.sequencer().write().issue(slot)
}

pub fn store_is_current(store: &DashboardStore, token: RequestToken) -> bool {
    store.sequencer().with_untracked(|seq| seq.is_current(token))
}

/// Write rendered text into the token's slot if the token is still current.
/// Returns false when the response was stale and dropped.
pub fn store_apply_output(store: &DashboardStore, token: RequestToken, text: String) -> bool {
    if !store_is_current(store, token) {
        return false;
    }
    match token.slot {
        OutputSlot::StatusPanel => store.status_panel().write().content = Some(text),
        OutputSlot::PromptResponse => store.prompt_response().set(Some(text)),
        OutputSlot::EmployeesOverview => store.employees_overview().set(Some(text)),
        OutputSlot::ProjectsList => store.projects_list().set(Some(text)),
        OutputSlot::FilesList => store.files_list().set(Some(text)),
        OutputSlot::SystemStatus => store.system_status().set(Some(text)),
    }
    true
}
