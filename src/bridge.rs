//! Backend Bridge
//!
//! Typed client over the backend procedures. One method per procedure, so
//! argument shapes are checked at compile time instead of by name.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BridgeResult;

#[async_trait(?Send)]
pub trait DashboardBridge {
    async fn get_system_status(&self) -> BridgeResult<Value>;

    async fn auth_login(&self, username: &str, password: &str) -> BridgeResult<Value>;

    async fn auth_logout(&self) -> BridgeResult<Value>;

    async fn crewai_submit_prompt(&self, prompt: &str) -> BridgeResult<Value>;

    async fn get_employee_overview(&self) -> BridgeResult<Value>;

    /// `due_date` is `None` when the field was left empty
    async fn assign_task(
        &self,
        employee: &str,
        description: &str,
        due_date: Option<&str>,
    ) -> BridgeResult<Value>;

    async fn update_task_status(&self, task_id: &str, status: &str) -> BridgeResult<Value>;

    async fn send_chat_message(&self, target: &str, message: &str) -> BridgeResult<Value>;

    async fn list_projects(&self) -> BridgeResult<Value>;

    async fn select_project(&self, project_id: &str) -> BridgeResult<Value>;

    async fn list_project_files(&self, project_id: &str) -> BridgeResult<Value>;
}
