//! Prompt Panel Component
//!
//! Free-text prompt to the agent crew and its latest reply.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::components::OutputBlock;
use crate::handlers;
use crate::models::OutputSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn PromptPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let (prompt, set_prompt) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = prompt.get_untracked();
        spawn_local(async move {
            handlers::submit_prompt(&TauriBridge, store, text).await;
        });
    };

    view! {
        <section class="panel prompt-panel">
            <h2>"Ask the Crew"</h2>
            <form on:submit=submit>
                <textarea
                    id="prompt-input"
                    rows="4"
                    placeholder="Describe what the crew should do..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Submit"</button>
            </form>
            <OutputBlock
                id={OutputSlot::PromptResponse.element_id()}
                text=Signal::derive(move || store.prompt_response().get())
                placeholder="No response yet."
            />
        </section>
    }
}
