//! Login Form Component
//!
//! Shows credentials inputs, or the signed-in user with a logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::handlers;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_dashboard_store();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            handlers::login(&TauriBridge, store, user, pass).await;
            set_password.set(String::new());
        });
    };

    let logout = move |_| {
        spawn_local(async move {
            handlers::logout(&TauriBridge, store).await;
        });
    };

    view! {
        <div class="session-area">
            {move || match store.session_user().get() {
                Some(user) => view! {
                    <div class="session-info">
                        <span class="session-user">{user}</span>
                        <button class="logout-btn" on:click=logout>"Logout"</button>
                    </div>
                }.into_any(),
                None => view! {
                    <form class="login-form" on:submit=login>
                        <input
                            id="login-username"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        <input
                            id="login-password"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="submit">"Login"</button>
                    </form>
                }.into_any(),
            }}
        </div>
    }
}
