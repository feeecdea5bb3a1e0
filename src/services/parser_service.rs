use serde_json::Value as JsonValue;

const FENCE: &str = "```";

/// Returns the interior of the first ```-fenced block, skipping an optional
/// language tag equal to `tag` (case-insensitive). Text without a complete
/// fence is returned trimmed and otherwise untouched.
pub fn strip_code_fence<'a>(raw: &'a str, tag: &str) -> &'a str {
    let Some(open) = raw.find(FENCE) else {
        return raw.trim();
    };
    let mut body = &raw[open + FENCE.len()..];
    if body
        .get(..tag.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(tag))
    {
        body = &body[tag.len()..];
    }
    match body.find(FENCE) {
        Some(close) => body[..close].trim(),
        None => raw.trim(),
    }
}

/// Unwraps `raw` only when the whole trimmed text is a single fenced block
/// (optionally tagged `tag`). Fences inside a longer answer are content and
/// are left alone.
pub fn strip_wrapping_fence<'a>(raw: &'a str, tag: &str) -> &'a str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
    else {
        return trimmed;
    };
    let inner = match inner.get(..tag.len()) {
        Some(head) if head.eq_ignore_ascii_case(tag) => &inner[tag.len()..],
        _ => inner,
    };
    if inner.contains(FENCE) {
        return trimmed;
    }
    inner.trim()
}

/// Best-effort JSON extraction from model output. Anything that does not
/// decode strictly yields `None`; there is no partial recovery.
pub fn extract_json_payload(raw: &str) -> Option<JsonValue> {
    let content = strip_code_fence(raw, "json");
    if content.is_empty() {
        return None;
    }
    match serde_json::from_str::<JsonValue>(content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Model output is not valid JSON: {}", e);
            None
        }
    }
}

/// The question records carried by a payload: either a bare array or an
/// object with a `questions` array.
pub fn question_records(payload: &JsonValue) -> &[JsonValue] {
    if let Some(arr) = payload.get("questions").and_then(|a| a.as_array()) {
        arr.as_slice()
    } else if let Some(arr) = payload.as_array() {
        arr.as_slice()
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_is_decoded() {
        let payload = extract_json_payload(r#"[{"question": "¿2+2?"}]"#).unwrap();
        assert_eq!(payload, json!([{"question": "¿2+2?"}]));
    }

    #[test]
    fn json_tagged_fence_is_unwrapped() {
        let raw = "Acá tenés el quiz:\n```json\n{\"questions\": [1, 2]}\n```\n¡Suerte!";
        assert_eq!(extract_json_payload(raw), Some(json!({"questions": [1, 2]})));
    }

    #[test]
    fn untagged_fence_is_unwrapped() {
        let raw = "```\n[\"a\"]\n```";
        assert_eq!(extract_json_payload(raw), Some(json!(["a"])));
    }

    #[test]
    fn prose_and_broken_json_yield_none() {
        assert_eq!(extract_json_payload("No puedo generar eso."), None);
        assert_eq!(extract_json_payload("```json\n[{\"question\": \n```"), None);
        assert_eq!(extract_json_payload(""), None);
        assert_eq!(extract_json_payload("```json\n```"), None);
    }

    #[test]
    fn unclosed_fence_falls_back_to_full_text() {
        assert_eq!(strip_code_fence("```json [1]", "json"), "```json [1]");
        assert_eq!(extract_json_payload("```json [1]"), None);
    }

    #[test]
    fn html_fence_is_stripped_for_answers() {
        let raw = "  ```HTML\n<h3>Hola</h3>\n```\n";
        assert_eq!(strip_wrapping_fence(raw, "html"), "<h3>Hola</h3>");
        assert_eq!(strip_wrapping_fence("```\n<p>x</p>\n```", "html"), "<p>x</p>");
        assert_eq!(strip_wrapping_fence("  <p>sin fence</p> ", "html"), "<p>sin fence</p>");
    }

    #[test]
    fn inner_fence_keeps_the_whole_answer() {
        let raw = "<h3>1) Explicación más técnica</h3>\n```\nprint('hola')\n```\n<h3>2) Explicación simple</h3>";
        assert_eq!(strip_wrapping_fence(raw, "html"), raw);

        let two_blocks = "```html\n<p>a</p>\n```\ntexto\n```\n<p>b</p>\n```";
        assert_eq!(strip_wrapping_fence(two_blocks, "html"), two_blocks);
    }

    #[test]
    fn records_come_from_array_or_questions_key() {
        assert_eq!(question_records(&json!([1, 2])).len(), 2);
        assert_eq!(question_records(&json!({"questions": [1]})).len(), 1);
        assert!(question_records(&json!({"quiz": [1]})).is_empty());
        assert!(question_records(&json!("texto")).is_empty());
    }
}
