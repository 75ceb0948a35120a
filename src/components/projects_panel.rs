//! Projects Panel Component
//!
//! Project list, the shared project selector and that project's files.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::components::OutputBlock;
use crate::handlers;
use crate::models::OutputSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let store = use_dashboard_store();

    let refresh_projects = move |_| {
        spawn_local(async move {
            handlers::refresh_projects(&TauriBridge, store).await;
        });
    };

    let select = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            handlers::select_project(&TauriBridge, store).await;
        });
    };

    let refresh_files = move |_| {
        spawn_local(async move {
            handlers::refresh_files(&TauriBridge, store).await;
        });
    };

    view! {
        <section class="panel projects-panel">
            <div class="panel-header">
                <h2>"Projects"</h2>
                <button class="refresh-btn" on:click=refresh_projects>"Refresh"</button>
            </div>
            <OutputBlock
                id={OutputSlot::ProjectsList.element_id()}
                text=Signal::derive(move || store.projects_list().get())
                placeholder="Not loaded."
            />

            <form class="select-project-form" on:submit=select>
                <input
                    id="select-project-id"
                    type="text"
                    placeholder="Project id"
                    prop:value=move || store.selected_project_id().get()
                    on:input=move |ev| store.selected_project_id().set(event_target_value(&ev))
                />
                <button type="submit">"Select"</button>
            </form>

            <div class="panel-header">
                <h2>"Files"</h2>
                <button class="refresh-btn" on:click=refresh_files>"Refresh"</button>
            </div>
            <OutputBlock
                id={OutputSlot::FilesList.element_id()}
                text=Signal::derive(move || store.files_list().get())
                placeholder="No project selected."
            />
        </section>
    }
}
