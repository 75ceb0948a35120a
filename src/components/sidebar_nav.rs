//! Sidebar Navigation Component

use leptos::prelude::*;

use crate::handlers;
use crate::models::DashboardView;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SidebarNav() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <nav class="sidebar-nav">
            <div class="brand">"Team Ready"</div>

            {DashboardView::ALL.iter().map(|&target| {
                let is_active = move || store.current_view().get() == target;
                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| handlers::navigate(store, target)
                    >
                        {target.label()}
                    </button>
                }
            }).collect_view()}

            <div class="sidebar-actions">
                <button class="create-btn" on:click=move |_| handlers::create_new_project(store)>
                    "+ New Project"
                </button>
                <button class="create-btn" on:click=move |_| handlers::create_new_task(store)>
                    "+ New Task"
                </button>
            </div>
        </nav>
    }
}
