use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::components::OutputBlock;
use crate::handlers;
use crate::models::OutputSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Overview of every employee (agent) and what it is working on
#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let store = use_dashboard_store();

    let refresh = move |_| {
        spawn_local(async move {
            handlers::refresh_employees(&TauriBridge, store).await;
        });
    };

    view! {
        <section class="panel employees-panel">
            <div class="panel-header">
                <h2>"Employees"</h2>
                <button class="refresh-btn" on:click=refresh>"Refresh"</button>
            </div>
            <OutputBlock
                id={OutputSlot::EmployeesOverview.element_id()}
                text=Signal::derive(move || store.employees_overview().get())
                placeholder="Not loaded."
            />
        </section>
    }
}
