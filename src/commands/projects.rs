//! Project Commands
//!
//! Frontend bindings for project listing, selection and files.

use serde::Serialize;
use serde_json::Value;

use super::{invoke_bare, invoke_with};
use crate::error::BridgeResult;

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ProjectIdArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: &'a str,
}

pub async fn list_projects() -> BridgeResult<Value> {
    invoke_bare("list_projects").await
}

pub async fn select_project(id: &str) -> BridgeResult<Value> {
    invoke_with("select_project", &IdArgs { id }).await
}

pub async fn list_project_files(project_id: &str) -> BridgeResult<Value> {
    invoke_with("list_project_files", &ProjectIdArgs { project_id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_id_is_camel_case() {
        let args = ProjectIdArgs { project_id: "p-1" };
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({"projectId": "p-1"}));
    }
}
