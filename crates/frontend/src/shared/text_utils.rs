//! String and timestamp helpers for rendering log rows.

use serde_json::Value;

/// Hard cap for summaries and body previews shown inline.
pub const PREVIEW_LIMIT: usize = 200;

/// Truncate to `limit` characters. Summaries carry UTF-8, so byte slicing
/// would split code points.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The backend stores both offset-carrying and naive timestamps; unparsable
/// input is returned unchanged.
pub fn format_ts(ts: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(ts) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    ts.to_string()
}

/// Prefer short, human-friendly text over a raw JSON blob.
///
/// A JSON-object-shaped summary yields its `"@message"` field, else
/// `"message"`, else the raw string truncated; anything else is trimmed and
/// truncated as-is.
pub fn extract_summary(summary: Option<&str>) -> String {
    let Some(raw) = summary else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            let message = value
                .get("@message")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .or_else(|| {
                    value
                        .get("message")
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                });
            if let Some(message) = message {
                return truncate(message, PREVIEW_LIMIT);
            }
        }
    }
    truncate(trimmed, PREVIEW_LIMIT)
}

/// Compact single-line preview of a lazily fetched body value. `None` means
/// the backend kept no content for that part.
pub fn preview_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(truncate(text, PREVIEW_LIMIT)),
        other => Some(truncate(&other.to_string(), PREVIEW_LIMIT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ts() {
        assert_eq!(format_ts("2024-03-15T14:02:26Z"), "2024-03-15 14:02:26");
        assert_eq!(
            format_ts("2024-03-15T14:02:26.123+02:00"),
            "2024-03-15 14:02:26"
        );
        assert_eq!(format_ts("2024-03-15T14:02:26"), "2024-03-15 14:02:26");
        assert_eq!(format_ts("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_extract_summary_prefers_at_message() {
        let raw = r#"{"@message": "apply complete", "message": "other"}"#;
        assert_eq!(extract_summary(Some(raw)), "apply complete");
    }

    #[test]
    fn test_extract_summary_falls_back_to_message() {
        let raw = r#"{"message": "plan started", "@level": "info"}"#;
        assert_eq!(extract_summary(Some(raw)), "plan started");
    }

    #[test]
    fn test_extract_summary_object_without_message_truncates_raw() {
        let raw = format!(r#"{{"payload": "{}"}}"#, "x".repeat(300));
        let extracted = extract_summary(Some(&raw));
        assert_eq!(extracted.chars().count(), PREVIEW_LIMIT);
        assert!(extracted.starts_with(r#"{"payload""#));
    }

    #[test]
    fn test_extract_summary_plain_text() {
        assert_eq!(extract_summary(Some("  plain line  ")), "plain line");
        assert_eq!(extract_summary(None), "");
        let long = "y".repeat(250);
        assert_eq!(extract_summary(Some(&long)).chars().count(), PREVIEW_LIMIT);
    }

    #[test]
    fn test_extract_summary_malformed_json_truncates_raw() {
        let raw = r#"{"message": unquoted}"#;
        assert_eq!(extract_summary(Some(raw)), raw);
    }

    #[test]
    fn test_preview_text() {
        use serde_json::json;
        assert_eq!(preview_text(&Value::Null), None);
        assert_eq!(
            preview_text(&json!("inner string")),
            Some("inner string".to_string())
        );
        assert_eq!(
            preview_text(&json!({"status": 200})),
            Some(r#"{"status":200}"#.to_string())
        );
        let long = Value::String("z".repeat(400));
        assert_eq!(
            preview_text(&long).map(|p| p.chars().count()),
            Some(PREVIEW_LIMIT)
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "ошибка применения плана";
        let cut = truncate(text, 6);
        assert_eq!(cut, "ошибка");
    }
}
