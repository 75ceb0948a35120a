use leptos::prelude::*;

/// Read-only block showing the last rendered response of a slot
#[component]
pub fn OutputBlock(
    #[prop(into)] id: String,
    #[prop(into)] text: Signal<Option<String>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <pre id=id class="output-block">
            {move || text.get().unwrap_or_else(|| placeholder.clone())}
        </pre>
    }
}
