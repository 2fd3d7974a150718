//! One pipeline per endpoint. Each one validates its input, calls its
//! provider when one is configured, and degrades to demo data on any failure.
//! Only missing input is reported as an error.

pub mod detail;
pub mod ingredients;
pub mod recipes;
pub mod videos;

use serde_json::Value;

/// Missing, `null`, `false`, `0` and `""` all count as "not given".
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// A text field as sent by a loosely typed client: strings as-is, numbers
/// in their JSON form, anything else treated as missing.
pub fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// An ingredient list field. Arrays keep their scalar entries, a single
/// string is split like free menu text.
pub fn ingredient_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(items) => Some(items.iter().filter_map(|item| text_field(Some(item))).collect()),
        Value::String(text) => Some(ingredients::split_menu(text)),
        _ => None,
    }
}
