//! Auth Commands
//!
//! Frontend bindings for session login/logout.

use serde::Serialize;
use serde_json::Value;

use super::{invoke_bare, invoke_with};
use crate::error::BridgeResult;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn auth_login(username: &str, password: &str) -> BridgeResult<Value> {
    invoke_with("auth_login", &LoginArgs { username, password }).await
}

pub async fn auth_logout() -> BridgeResult<Value> {
    invoke_bare("auth_logout").await
}
