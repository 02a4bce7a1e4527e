//! API route modules.

pub mod email;
pub mod summary;
pub mod upload;

use serde_json::Value;

/// Extract a non-empty string field from a JSON request body.
pub(crate) fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_str() {
        let body = json!({"transcript": "notes", "instruction": "", "count": 3});

        assert_eq!(non_empty_str(&body, "transcript"), Some("notes"));
        assert_eq!(non_empty_str(&body, "instruction"), None);
        assert_eq!(non_empty_str(&body, "count"), None);
        assert_eq!(non_empty_str(&body, "missing"), None);
    }
}
