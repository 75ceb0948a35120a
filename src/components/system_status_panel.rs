use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::components::OutputBlock;
use crate::handlers;
use crate::models::OutputSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SystemStatusPanel() -> impl IntoView {
    let store = use_dashboard_store();

    let refresh = move |_| {
        spawn_local(async move {
            handlers::refresh_system_status(&TauriBridge, store).await;
        });
    };

    view! {
        <section class="panel system-panel">
            <div class="panel-header">
                <h2>"System Status"</h2>
                <button class="refresh-btn" on:click=refresh>"Refresh"</button>
            </div>
            <OutputBlock
                id={OutputSlot::SystemStatus.element_id()}
                text=Signal::derive(move || store.system_status().get())
                placeholder="Not loaded."
            />
        </section>
    }
}
