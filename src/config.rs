//! Dashboard Configuration
//!
//! Small set of UI tunables, read once at startup from `localStorage`.

use serde::{Deserialize, Serialize};

pub const CONFIG_STORAGE_KEY: &str = "crew-dashboard.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How long a notice stays in the tray before it is dismissed
    pub notice_ttl_ms: u32,
    /// Oldest notices are dropped past this count
    pub max_notices: usize,
    /// Starting value of the notification badge
    pub initial_notifications: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            notice_ttl_ms: 4000,
            max_notices: 5,
            initial_notifications: 3,
        }
    }
}

impl DashboardConfig {
    /// Parse a stored config, falling back to defaults on bad input
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed dashboard config");
                Self::default()
            }
        }
    }

    /// Load from `localStorage`; only meaningful inside the browser
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match stored {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{"max_notices": 2}"#);
        assert_eq!(config.max_notices, 2);
        assert_eq!(config.notice_ttl_ms, 4000);
        assert_eq!(config.initial_notifications, 3);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(DashboardConfig::from_json("not json"), DashboardConfig::default());
    }
}
