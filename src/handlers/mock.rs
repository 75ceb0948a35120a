//! In-memory bridge for handler tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::bridge::DashboardBridge;
use crate::error::{BridgeError, BridgeResult};

/// A recorded bridge call: procedure name plus its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub procedure: &'static str,
    pub args: Vec<Option<String>>,
}

#[derive(Default)]
pub struct MockBridge {
    responses: RefCell<HashMap<&'static str, BridgeResult<Value>>>,
    calls: RefCell<Vec<Call>>,
    /// Runs inside every call, before it resolves
    on_call: RefCell<Option<Box<dyn Fn(&'static str)>>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, procedure: &'static str, response: BridgeResult<Value>) -> Self {
        self.responses.borrow_mut().insert(procedure, response);
        self
    }

    pub fn reject(self, procedure: &'static str) -> Self {
        self.respond(procedure, Err(BridgeError::Rejected(format!("{procedure} unavailable"))))
    }

    pub fn with_hook(self, hook: impl Fn(&'static str) + 'static) -> Self {
        *self.on_call.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, procedure: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.procedure == procedure).count()
    }

    fn record(&self, procedure: &'static str, args: Vec<Option<&str>>) -> BridgeResult<Value> {
        self.calls.borrow_mut().push(Call {
            procedure,
            args: args.into_iter().map(|a| a.map(str::to_string)).collect(),
        });
        if let Some(hook) = self.on_call.borrow().as_ref() {
            hook(procedure);
        }
        self.responses
            .borrow()
            .get(procedure)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}

#[async_trait(?Send)]
impl DashboardBridge for MockBridge {
    async fn get_system_status(&self) -> BridgeResult<Value> {
        self.record("get_system_status", vec![])
    }

    async fn auth_login(&self, username: &str, password: &str) -> BridgeResult<Value> {
        self.record("auth_login", vec![Some(username), Some(password)])
    }

    async fn auth_logout(&self) -> BridgeResult<Value> {
        self.record("auth_logout", vec![])
    }

    async fn crewai_submit_prompt(&self, prompt: &str) -> BridgeResult<Value> {
        self.record("crewai_submit_prompt", vec![Some(prompt)])
    }

    async fn get_employee_overview(&self) -> BridgeResult<Value> {
        self.record("get_employee_overview", vec![])
    }

    async fn assign_task(
        &self,
        employee: &str,
        description: &str,
        due_date: Option<&str>,
    ) -> BridgeResult<Value> {
        self.record("assign_task", vec![Some(employee), Some(description), due_date])
    }

    async fn update_task_status(&self, task_id: &str, status: &str) -> BridgeResult<Value> {
        self.record("update_task_status", vec![Some(task_id), Some(status)])
    }

    async fn send_chat_message(&self, target: &str, message: &str) -> BridgeResult<Value> {
        self.record("send_chat_message", vec![Some(target), Some(message)])
    }

    async fn list_projects(&self) -> BridgeResult<Value> {
        self.record("list_projects", vec![])
    }

    async fn select_project(&self, project_id: &str) -> BridgeResult<Value> {
        self.record("select_project", vec![Some(project_id)])
    }

    async fn list_project_files(&self, project_id: &str) -> BridgeResult<Value> {
        self.record("list_project_files", vec![Some(project_id)])
    }
}

/// Fresh store under a reactive owner; keep the owner alive for the test
pub fn test_store() -> (leptos::prelude::Owner, crate::store::DashboardStore) {
    let owner = leptos::prelude::Owner::new();
    owner.set();
    let config = crate::config::DashboardConfig::default();
    let store = reactive_stores::Store::new(crate::store::DashboardState::new(&config));
    (owner, store)
}
