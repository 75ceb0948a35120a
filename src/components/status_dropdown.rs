//! Crew Status Dropdown Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::handlers;
use crate::models::OutputSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Header dropdown; fetches fresh status each time it opens
#[component]
pub fn StatusDropdown() -> impl IntoView {
    let store = use_dashboard_store();

    let toggle = move |_| {
        spawn_local(async move {
            handlers::toggle_status_panel(&TauriBridge, store).await;
        });
    };

    let dropdown_class = move || {
        if store.status_panel().with(|panel| panel.open) {
            "status-dropdown open"
        } else {
            "status-dropdown"
        }
    };

    view! {
        <div class="status-wrapper">
            <button class="status-btn" on:click=toggle>"Crew Status"</button>
            <div id="crewai-status-dropdown" class=dropdown_class>
                <pre id={OutputSlot::StatusPanel.element_id()}>
                    {move || store.status_panel().with(|panel| panel.content.clone().unwrap_or_default())}
                </pre>
            </div>
        </div>
    }
}
