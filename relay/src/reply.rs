use serde_json::Value;

/// Interprets a downstream body: valid JSON is relayed as-is, anything else
/// is relayed as raw text. n8n workflows answer either way depending on how
/// their last node is set up.
pub fn reply_value(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_bodies_keep_their_type() {
        assert_eq!(reply_value("42"), json!(42));
        assert_eq!(reply_value("null"), Value::Null);
        assert_eq!(reply_value(r#""quoted""#), json!("quoted"));
        assert_eq!(
            reply_value(r#"{"output": "hi", "ok": true}"#),
            json!({"output": "hi", "ok": true})
        );
        assert_eq!(reply_value(" 42 "), json!(42));
    }

    #[test]
    fn non_json_bodies_become_strings() {
        assert_eq!(reply_value("hello world"), json!("hello world"));
        assert_eq!(reply_value(""), json!(""));
        assert_eq!(reply_value("42abc"), json!("42abc"));
        assert_eq!(reply_value("{broken"), json!("{broken"));
    }
}
