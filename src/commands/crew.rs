//! Crew Commands
//!
//! Frontend binding for submitting prompts to the agent crew.

use serde::Serialize;
use serde_json::Value;

use super::invoke_with;
use crate::error::BridgeResult;

#[derive(Serialize)]
struct PromptArgs<'a> {
    prompt: &'a str,
}

pub async fn crewai_submit_prompt(prompt: &str) -> BridgeResult<Value> {
    invoke_with("crewai_submit_prompt", &PromptArgs { prompt }).await
}
