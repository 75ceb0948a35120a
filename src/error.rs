//! Bridge Errors
//!
//! Failure taxonomy for calls across the backend command bridge.

use thiserror::Error;

/// Error returned by a [`DashboardBridge`](crate::bridge::DashboardBridge) call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The backend procedure rejected or threw.
    #[error("remote call rejected: {0}")]
    Rejected(String),

    /// Arguments could not be turned into a JS value.
    #[error("failed to encode args: {0}")]
    Encode(String),

    /// The resolved value could not be read back as JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
