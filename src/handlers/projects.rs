//! Project Handlers
//!
//! Project list, selection and file listing. Selection and file refresh
//! share the selected project id held in the store.

use leptos::prelude::*;

use super::{fetch_into, fire, require};
use crate::bridge::DashboardBridge;
use crate::models::OutputSlot;
use crate::store::{DashboardStateStoreFields, DashboardStore};

pub async fn refresh_projects<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    fetch_into(&store, OutputSlot::ProjectsList, "list_projects", bridge.list_projects()).await;
}

pub async fn select_project<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    let project_id = store.selected_project_id().get_untracked();
    if !require(&store, &project_id, "Project id") {
        return;
    }
    tracing::info!(project_id = %project_id, "selecting project");
    fire(&store, "select_project", bridge.select_project(&project_id)).await;
}

pub async fn refresh_files<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    let project_id = store.selected_project_id().get_untracked();
    if !require(&store, &project_id, "Project id") {
        return;
    }
    fetch_into(&store, OutputSlot::FilesList, "list_project_files", bridge.list_project_files(&project_id)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mock::{test_store, MockBridge};
    use crate::store::store_issue_token;
    use serde_json::json;

    #[tokio::test]
    async fn test_select_and_files_share_project_id() {
        let (_owner, store) = test_store();
        store.selected_project_id().set("proj-9".into());
        let bridge = MockBridge::new().respond("list_project_files", Ok(json!(["main.rs", "lib.rs"])));

        select_project(&bridge, store).await;
        refresh_files(&bridge, store).await;

        let calls = bridge.calls();
        assert_eq!(calls[0].procedure, "select_project");
        assert_eq!(calls[0].args, vec![Some("proj-9".to_string())]);
        assert_eq!(calls[1].procedure, "list_project_files");
        assert_eq!(calls[1].args, vec![Some("proj-9".to_string())]);
        assert_eq!(store.files_list().get_untracked().as_deref(), Some(r#"["main.rs","lib.rs"]"#));
    }

    #[tokio::test]
    async fn test_refresh_projects_renders_json() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new().respond("list_projects", Ok(json!([{"id": "p1"}])));

        refresh_projects(&bridge, store).await;

        assert_eq!(store.projects_list().get_untracked().as_deref(), Some(r#"[{"id":"p1"}]"#));
    }

    #[tokio::test]
    async fn test_superseded_projects_response_is_dropped() {
        let (_owner, store) = test_store();
        // a second refresh starts while the first is still in flight
        let bridge = MockBridge::new()
            .respond("list_projects", Ok(json!(["stale"])))
            .with_hook(move |_| {
                store_issue_token(&store, OutputSlot::ProjectsList);
            });

        refresh_projects(&bridge, store).await;

        assert_eq!(store.projects_list().get_untracked(), None);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_old_list() {
        let (_owner, store) = test_store();
        store.projects_list().set(Some("[]".into()));
        let bridge = MockBridge::new().reject("list_projects");

        refresh_projects(&bridge, store).await;

        assert_eq!(store.projects_list().get_untracked().as_deref(), Some("[]"));
        assert_eq!(store.notices().get_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_files_without_project_skips_call() {
        let (_owner, store) = test_store();
        let bridge = MockBridge::new();

        refresh_files(&bridge, store).await;

        assert!(bridge.calls().is_empty());
    }
}
