use super::{fetch_into, require};
use crate::bridge::DashboardBridge;
use crate::models::OutputSlot;
use crate::render::redact;
use crate::store::DashboardStore;

/// Send a prompt to the crew and show whatever comes back
pub async fn submit_prompt<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore, prompt: String) {
    if !require(&store, &prompt, "Prompt") {
        return;
    }
    tracing::info!(prompt = %redact(&prompt), "submitting prompt");
    fetch_into(&store, OutputSlot::PromptResponse, "crewai_submit_prompt", bridge.crewai_submit_prompt(&prompt)).await;
}
