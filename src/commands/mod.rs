//! Tauri Command Wrappers
//!
//! Frontend bindings to backend procedures, organized by domain. Each
//! procedure is invoked by name through `window.__TAURI__.core.invoke`.

mod auth;
mod crew;
mod projects;
mod system;
mod team;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::bridge::DashboardBridge;
use crate::error::{BridgeError, BridgeResult};

pub use team::AssignTaskArgs;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Encode args as a plain JS object. Missing options become `null`, not `undefined`.
fn encode_args<A: Serialize + ?Sized>(args: &A) -> BridgeResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    args.serialize(&serializer)
        .map_err(|e| BridgeError::Encode(e.to_string()))
}

fn decode_response(value: JsValue) -> BridgeResult<Value> {
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode(e.to_string()))
}

fn rejection_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn invoke_with<A: Serialize + ?Sized>(cmd: &str, args: &A) -> BridgeResult<Value> {
    let js_args = encode_args(args)?;
    let result = invoke(cmd, js_args)
        .await
        .map_err(|e| BridgeError::Rejected(rejection_message(e)))?;
    decode_response(result)
}

async fn invoke_bare(cmd: &str) -> BridgeResult<Value> {
    let result = invoke(cmd, JsValue::NULL)
        .await
        .map_err(|e| BridgeError::Rejected(rejection_message(e)))?;
    decode_response(result)
}

/// Production bridge backed by the Tauri command channel
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBridge;

#[async_trait(?Send)]
impl DashboardBridge for TauriBridge {
    async fn get_system_status(&self) -> BridgeResult<Value> {
        system::get_system_status().await
    }

    async fn auth_login(&self, username: &str, password: &str) -> BridgeResult<Value> {
        auth::auth_login(username, password).await
    }

    async fn auth_logout(&self) -> BridgeResult<Value> {
        auth::auth_logout().await
    }

    async fn crewai_submit_prompt(&self, prompt: &str) -> BridgeResult<Value> {
        crew::crewai_submit_prompt(prompt).await
    }

    async fn get_employee_overview(&self) -> BridgeResult<Value> {
        team::get_employee_overview().await
    }

    async fn assign_task(
        &self,
        employee: &str,
        description: &str,
        due_date: Option<&str>,
    ) -> BridgeResult<Value> {
        team::assign_task(&AssignTaskArgs { employee, description, due_date }).await
    }

    async fn update_task_status(&self, task_id: &str, status: &str) -> BridgeResult<Value> {
        team::update_task_status(task_id, status).await
    }

    async fn send_chat_message(&self, target: &str, message: &str) -> BridgeResult<Value> {
        team::send_chat_message(target, message).await
    }

    async fn list_projects(&self) -> BridgeResult<Value> {
        projects::list_projects().await
    }

    async fn select_project(&self, project_id: &str) -> BridgeResult<Value> {
        projects::select_project(project_id).await
    }

    async fn list_project_files(&self, project_id: &str) -> BridgeResult<Value> {
        projects::list_project_files(project_id).await
    }
}
