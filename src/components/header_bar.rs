//! Header Bar Component
//!
//! Search, crew status dropdown, notifications, settings and session.

use leptos::prelude::*;

use crate::components::{LoginForm, StatusDropdown};
use crate::handlers;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_dashboard_store();
    let (query, set_query) = signal(String::new());

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handlers::perform_search(store, &query.get_untracked());
    };

    view! {
        <header class="header-bar">
            <form class="search-form" on:submit=search>
                <input
                    id="global-search"
                    type="search"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </form>

            <StatusDropdown />

            <button
                class="icon-btn notifications"
                title="Notifications"
                on:click=move |_| handlers::open_notifications(store)
            >
                "🔔"
                <span id="notification-badge" class="badge">
                    {move || store.notification_count().get()}
                </span>
            </button>

            <button
                class="icon-btn settings"
                title="Settings"
                on:click=move |_| handlers::open_user_settings(store)
            >
                "⚙"
            </button>

            <LoginForm />
        </header>
    }
}
