//! Notice Tray Component
//!
//! Renders the store's notice channel. Each notice dismisses itself after
//! the configured TTL, or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::DashboardConfig;
use crate::store::{store_dismiss_notice, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let store = use_dashboard_store();
    let ttl_ms = use_context::<DashboardConfig>()
        .map(|config| config.notice_ttl_ms)
        .unwrap_or_else(|| DashboardConfig::default().notice_ttl_ms);

    view! {
        <div class="notice-tray">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(ttl_ms).await;
                        store_dismiss_notice(&store, id);
                    });
                    view! {
                        <div
                            class=notice.level.css_class()
                            on:click=move |_| store_dismiss_notice(&store, id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
