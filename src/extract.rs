//! Pulling structured data out of LLM replies.
//!
//! With structured output enabled the reply is already a bare JSON object and
//! parses directly. Otherwise the reply is free text, and the JSON is taken
//! from the first `{` to the last `}`. That scan is a last resort: it breaks
//! as soon as the surrounding prose contains braces of its own.

use crate::error::{KondateError, Result};
use crate::model::Recipe;
use log::debug;
use serde_json::Value;

/// Parse a reply into JSON, trying the whole reply before the brace scan.
pub fn extract_json(reply: &str) -> Result<Value> {
    let trimmed = reply.trim();
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }

    debug!("Reply is not bare JSON, scanning for braces");
    let block = brace_block(trimmed).ok_or(KondateError::JsonNotFound)?;
    Ok(serde_json::from_str(block)?)
}

/// Text from the first `{` to the last `}`, inclusive.
fn brace_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Recipes from a parsed reply: its `recipes` array, or the whole object as one recipe.
pub fn parse_recipes(value: Value) -> Result<Vec<Recipe>> {
    match value {
        Value::Object(mut map) => match map.remove("recipes") {
            Some(Value::Array(items)) => Ok(items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            Some(Value::Null) | None => Ok(vec![serde_json::from_value(Value::Object(map))?]),
            Some(other) => Ok(vec![serde_json::from_value(other)?]),
        },
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}
