//! Team Commands
//!
//! Frontend bindings for employees, task assignment and chat.

use serde::Serialize;
use serde_json::Value;

use super::{invoke_bare, invoke_with};
use crate::error::BridgeResult;

// ========================
// Command Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct AssignTaskArgs<'a> {
    pub employee: &'a str,
    pub description: &'a str,
    #[serde(rename = "dueDate")]
    pub due_date: Option<&'a str>,
}

#[derive(Serialize)]
struct TaskStatusArgs<'a> {
    id: &'a str,
    status: &'a str,
}

#[derive(Serialize)]
struct ChatArgs<'a> {
    target: &'a str,
    message: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_employee_overview() -> BridgeResult<Value> {
    invoke_bare("get_employee_overview").await
}

pub async fn assign_task(args: &AssignTaskArgs<'_>) -> BridgeResult<Value> {
    invoke_with("assign_task", args).await
}

pub async fn update_task_status(id: &str, status: &str) -> BridgeResult<Value> {
    invoke_with("update_task_status", &TaskStatusArgs { id, status }).await
}

pub async fn send_chat_message(target: &str, message: &str) -> BridgeResult<Value> {
    invoke_with("send_chat_message", &ChatArgs { target, message }).await
}
