use leptos::prelude::*;

use crate::handlers;
use crate::store::use_dashboard_store;

/// Quick actions; each one is only simulated
const QUICK_ACTIONS: &[&str] = &["Kickoff Crew", "Pause Agents", "Approve Plan", "Export Report"];

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="action-bar">
            {QUICK_ACTIONS.iter().map(|&action| view! {
                <button class="action-btn" on:click=move |_| handlers::handle_action(store, action)>
                    {action}
                </button>
            }).collect_view()}
        </div>
    }
}
