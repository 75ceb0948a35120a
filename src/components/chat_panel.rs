//! Chat Panel Component
//!
//! Sends a direct message to one employee or agent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::handlers;
use crate::store::use_dashboard_store;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let (target, set_target) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let to = target.get_untracked();
        let text = message.get_untracked();
        spawn_local(async move {
            handlers::send_chat_message(&TauriBridge, store, to, text).await;
            set_message.set(String::new());
        });
    };

    view! {
        <section class="panel chat-panel">
            <h2>"Chat"</h2>
            <form on:submit=send>
                <input
                    id="chat-target"
                    type="text"
                    placeholder="To"
                    prop:value=move || target.get()
                    on:input=move |ev| set_target.set(event_target_value(&ev))
                />
                <input
                    id="chat-message"
                    type="text"
                    placeholder="Message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </section>
    }
}
