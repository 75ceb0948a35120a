//! Team Handlers
//!
//! Employee overview, task assignment, task status and chat.

use super::{fetch_into, fire, require};
use crate::bridge::DashboardBridge;
use crate::models::OutputSlot;
use crate::render::redact;
use crate::store::DashboardStore;

pub async fn refresh_employees<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    fetch_into(&store, OutputSlot::EmployeesOverview, "get_employee_overview", bridge.get_employee_overview()).await;
}

/// An empty due date field is sent as no due date at all
pub async fn assign_task<B: DashboardBridge + ?Sized>(
    bridge: &B,
    store: DashboardStore,
    employee: String,
    description: String,
    due_date: String,
) {
    if !require(&store, &employee, "Employee") || !require(&store, &description, "Task description") {
        return;
    }
    let due_date = Some(due_date.as_str()).filter(|d| !d.is_empty());
    tracing::info!(employee = %employee, due_date = ?due_date, "assigning task");
    fire(&store, "assign_task", bridge.assign_task(&employee, &description, due_date)).await;
}

pub async fn update_task_status<B: DashboardBridge + ?Sized>(
    bridge: &B,
    store: DashboardStore,
    task_id: String,
    status: String,
) {
    if !require(&store, &task_id, "Task id") {
        return;
    }
    tracing::info!(task_id = %task_id, status = %status, "updating task status");
    fire(&store, "update_task_status", bridge.update_task_status(&task_id, &status)).await;
}

pub async fn send_chat_message<B: DashboardBridge + ?Sized>(
    bridge: &B,
    store: DashboardStore,
    target: String,
    message: String,
) {
    if !require(&store, &message, "Message") {
        return;
    }
    tracing::info!(target_agent = %target, message = %redact(&message), "sending chat message");
    fire(&store, "send_chat_message", bridge.send_chat_message(&target, &message)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mock::{test_store, MockBridge};
    use crate::models::NoticeLevel;
    use crate::store::DashboardStateStoreFields;
    use leptos::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_assign_task_empty_due_date_is_none() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new();

        assign_task(&bridge, store, "e-42".into(), "Write tests".into(), String::new()).await;

        let calls = bridge.calls();
        assert_eq!(calls[0].procedure, "assign_task");
        assert_eq!(
            calls[0].args,
            vec![Some("e-42".to_string()), Some("Write tests".to_string()), None]
        );
    }

    #[tokio::test]
    async fn test_assign_task_keeps_due_date() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new();

        assign_task(&bridge, store, "e-42".into(), "Ship".into(), "2026-11-01".into()).await;

        assert_eq!(bridge.calls()[0].args[2].as_deref(), Some("2026-11-01"));
    }

    #[tokio::test]
    async fn test_assign_task_requires_employee() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new();

        assign_task(&bridge, store, String::new(), "Ship".into(), String::new()).await;

        assert!(bridge.calls().is_empty());
        assert_eq!(store.notices().get_untracked()[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_refresh_employees_renders_json() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new()
            .respond("get_employee_overview", Ok(json!([{"name": "Coder", "busy": false}])));

        refresh_employees(&bridge, store).await;

        assert_eq!(
            store.employees_overview().get_untracked().as_deref(),
            Some(r#"[{"busy":false,"name":"Coder"}]"#)
        );
    }

    #[tokio::test]
    async fn test_status_and_chat_forward_args() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new().reject("send_chat_message");

        update_task_status(&bridge, store, "t-1".into(), "done".into()).await;
        send_chat_message(&bridge, store, "Critic".into(), "review pls".into()).await;

        let calls = bridge.calls();
        assert_eq!(calls[0].args, vec![Some("t-1".to_string()), Some("done".to_string())]);
        assert_eq!(calls[1].args, vec![Some("Critic".to_string()), Some("review pls".to_string())]);
        assert_eq!(store.notices().get_untracked().len(), 1);
    }
}
