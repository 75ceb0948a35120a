//! Crew Dashboard App
//!
//! Root component: header, sidebar navigation and the active section.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActionBar, ChatPanel, EmployeesPanel, HeaderBar, NoticeTray, ProjectsPanel, PromptPanel,
    SidebarNav, SystemStatusPanel, TaskForms,
};
use crate::config::DashboardConfig;
use crate::models::DashboardView;
use crate::store::{DashboardState, DashboardStateStoreFields};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(DashboardState::new(&config));

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    view! {
        <div class="app-layout">
            <SidebarNav />

            <main class="main-content">
                <HeaderBar />

                {move || match store.current_view().get() {
                    DashboardView::Dashboard => view! {
                        <section class="dashboard-section">
                            <ActionBar />
                            <PromptPanel />
                            <SystemStatusPanel />
                        </section>
                    }.into_any(),
                    DashboardView::MyTasks => view! {
                        <section class="tasks-section">
                            <TaskForms />
                        </section>
                    }.into_any(),
                    DashboardView::ProjectFiles => view! {
                        <section class="projects-section">
                            <ProjectsPanel />
                        </section>
                    }.into_any(),
                    DashboardView::TeamConfiguration => view! {
                        <section class="team-section">
                            <EmployeesPanel />
                            <ChatPanel />
                        </section>
                    }.into_any(),
                }}
            </main>

            <NoticeTray />
        </div>
    }
}
