//! Terminal rendering of action outcomes.

use serde_json::Value;

/// Render a successful result: `Done.` for null, the structural rendering
/// otherwise.
pub fn success(value: &Value) -> String {
    match value {
        Value::Null => "Done.".to_string(),
        other => render_value(other),
    }
}

/// Render a failure reason behind an `Error: ` prefix.
///
/// The reason is surfaced verbatim; it is usually a string but the envelope
/// does not guarantee that.
pub fn failure(reason: &Value) -> String {
    format!("Error: {}", render_value(reason))
}

/// Bare strings print unquoted; everything else pretty-prints as JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_success_is_done() {
        assert_eq!(success(&Value::Null), "Done.");
    }

    #[test]
    fn numbers_render_bare() {
        assert_eq!(success(&json!(1519323742721_i64)), "1519323742721");
    }

    #[test]
    fn strings_render_unquoted() {
        assert_eq!(success(&json!("Default")), "Default");
        assert_eq!(failure(&json!("deck was not found")), "Error: deck was not found");
    }

    #[test]
    fn structures_render_pretty() {
        let rendered = success(&json!({ "Default": 1 }));
        assert!(rendered.contains("\"Default\": 1"));
    }

    #[test]
    fn structured_failures_render_pretty() {
        let rendered = failure(&json!({ "code": 1 }));
        assert!(rendered.starts_with("Error: "));
        assert!(rendered.contains("\"code\": 1"));
    }
}
