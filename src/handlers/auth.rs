use leptos::prelude::*;

use super::{fire, require};
use crate::bridge::DashboardBridge;
use crate::store::{DashboardStateStoreFields, DashboardStore};

/// Password is passed through to the bridge and never logged
pub async fn login<B: DashboardBridge + ?Sized>(
    bridge: &B,
    store: DashboardStore,
    username: String,
    password: String,
) {
    if !require(&store, &username, "Username") {
        return;
    }
    tracing::info!(user = %username, "login");
    if fire(&store, "auth_login", bridge.auth_login(&username, &password)).await.is_some() {
        store.session_user().set(Some(username));
    }
}

pub async fn logout<B: DashboardBridge + ?Sized>(bridge: &B, store: DashboardStore) {
    tracing::info!("logout");
    if fire(&store, "auth_logout", bridge.auth_logout()).await.is_some() {
        store.session_user().set(None);
    }
}
