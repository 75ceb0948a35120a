//! Rendering Helpers
//!
//! Turns resolved bridge values into display text and scrubs log lines.

use serde_json::Value;

/// Keywords masked before anything reaches the console
const SENSITIVE_KEYWORDS: &[&str] = &["API_KEY", "SECRET", "PASSWORD", "TOKEN"];

/// Display text for a resolved value: strings verbatim, everything else as compact JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One read of the notification badge: decrement, floored at zero
pub fn decrement_counter(count: u32) -> u32 {
    count.saturating_sub(1)
}

/// Mask credential-like keywords in a log message
pub fn redact(message: &str) -> String {
    let mut out = message.to_string();
    for keyword in SENSITIVE_KEYWORDS {
        out = out.replace(keyword, "[REDACTED]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_string_verbatim() {
        assert_eq!(render_value(&json!("done")), "done");
        assert_eq!(render_value(&json!("")), "");
    }

    #[test]
    fn test_render_structures_as_json() {
        assert_eq!(render_value(&json!({"ok": true})), r#"{"ok":true}"#);
        assert_eq!(render_value(&json!([1, 2, 3])), "[1,2,3]");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_counter_floors_at_zero() {
        for n in 0..20u32 {
            assert_eq!(decrement_counter(n), n.saturating_sub(1));
        }
        let mut count = 3;
        for _ in 0..10 {
            count = decrement_counter(count);
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_redact() {
        assert_eq!(
            redact("login PASSWORD=hunter2 TOKEN=x"),
            "login [REDACTED]=hunter2 [REDACTED]=x"
        );
        assert_eq!(redact("plain message"), "plain message");
    }
}
