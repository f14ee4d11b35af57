use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::{TranslateError, Translation};

static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)\s*```").expect("valid fence regex"));

/// Shortest SQL accepted from the model
const MIN_SQL_CHARS: usize = 5;

/// Pull the SQL out of a model reply
///
/// Tolerates markdown fences and chatter around the JSON object, and accepts
/// either an `sql` or a `query` key.
pub fn parse_translation(reply: &str) -> Result<Translation, TranslateError> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(TranslateError::Unparseable("empty reply".into()));
    }

    // strip markdown fences if present
    let text = FENCE_REGEX
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str());

    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(TranslateError::Unparseable("no JSON object in reply".into()));
    };
    if end < start {
        return Err(TranslateError::Unparseable("no JSON object in reply".into()));
    }

    let value: Value = serde_json::from_str(&text[start..=end])
        .map_err(|e| TranslateError::Unparseable(e.to_string()))?;

    let sql = ["sql", "query"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .ok_or_else(|| TranslateError::Unparseable("reply has no `sql` or `query` field".into()))?;

    if sql.chars().filter(|c| !c.is_whitespace()).count() < MIN_SQL_CHARS {
        return Err(TranslateError::Unparseable(format!("SQL too short: {sql:?}")));
    }

    Ok(Translation {
        sql: sql.to_string(),
    })
}
