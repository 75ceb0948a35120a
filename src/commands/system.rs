//! System Commands
//!
//! Frontend binding for the backend status query.

use serde_json::Value;

use super::invoke_bare;
use crate::error::BridgeResult;

pub async fn get_system_status() -> BridgeResult<Value> {
    invoke_bare("get_system_status").await
}
