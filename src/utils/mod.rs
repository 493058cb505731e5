//! Utility functions and helpers.

pub mod http;

use serde_json::Value;

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a scalar JSON value as plain text.
///
/// Strings are returned unquoted; numbers use their JSON form. Empty strings,
/// nulls, arrays and objects yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  Email principal :\n\t a@x.com "),
            "Email principal : a@x.com"
        );
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("500123")), Some("500123".to_string()));
        assert_eq!(scalar_text(&json!(500123)), Some("500123".to_string()));
        assert_eq!(scalar_text(&json!("  ")), None);
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!({"a": 1})), None);
    }
}
