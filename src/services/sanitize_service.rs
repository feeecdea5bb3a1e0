use crate::models::question::{QuizQuestion, MAX_OPTIONS, MIN_OPTIONS};
use serde_json::Value as JsonValue;

pub const DEFAULT_TIP: &str = "Leé con atención todas las opciones y descartá las que seguro no son.";

/// Cleans raw question records into valid [`QuizQuestion`]s, keeping input order.
/// Records that cannot be salvaged are dropped.
pub fn normalize_questions(records: &[JsonValue]) -> Vec<QuizQuestion> {
    records.iter().filter_map(normalize_question).collect()
}

pub fn normalize_question(record: &JsonValue) -> Option<QuizQuestion> {
    let question = text_field(record, "question");
    if question.is_empty() {
        return None;
    }

    let mut options: Vec<String> = record
        .get("options")
        .and_then(|o| o.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(scalar_text)
                .filter(|o| !o.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let correct = text_field(record, "correct");
    if correct.is_empty() || options.len() < MIN_OPTIONS {
        return None;
    }

    let tip = match text_field(record, "tip") {
        t if t.is_empty() => DEFAULT_TIP.to_string(),
        t => t,
    };

    // The answer must stay selectable: keep three distractors and append it.
    if !options.contains(&correct) {
        options.truncate(MAX_OPTIONS - 1);
        options.push(correct.clone());
    }
    options.truncate(MAX_OPTIONS);

    Some(QuizQuestion {
        question,
        options,
        correct,
        tip,
    })
}

fn text_field(record: &JsonValue, key: &str) -> String {
    record.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Strings are trimmed; numbers and booleans are accepted in their JSON
/// spelling since models sometimes emit `"options": [1, 2, 3]`.
fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.trim().to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
