//! Upstream result normalization.
//!
//! The backend's `result` field arrives in several shapes depending on which
//! code path served the request: a plain array of strings, an array of
//! comment objects, one newline-separated blob, or a wrapper object. Rather
//! than probing types sequentially, the value is classified once into a
//! closed set of shapes and then mapped.

use serde_json::Value;

use crate::errors::AssistError;

/// The payload shapes we accept, in match priority order.
#[derive(Debug)]
enum ResultShape<'a> {
    Missing,
    Sequence(&'a [Value]),
    Text(&'a str),
    CommentsObject(&'a [Value]),
    Other(&'a Value),
}

fn classify(result: Option<&Value>) -> ResultShape<'_> {
    match result {
        None | Some(Value::Null) => ResultShape::Missing,
        Some(Value::Array(items)) => ResultShape::Sequence(items),
        Some(Value::String(text)) => ResultShape::Text(text),
        Some(value) => match value.get("comments") {
            Some(Value::Array(items)) => ResultShape::CommentsObject(items),
            _ => ResultShape::Other(value),
        },
    }
}

/// Map one sequence element to display text.
///
/// Strings pass through; comment objects contribute their `text` field or the
/// nested comment-thread snippet path; anything else is serialized so the
/// element is still visible rather than dropped.
fn element_text(item: &Value) -> String {
    if let Value::String(s) = item {
        return s.clone();
    }
    match item.get("text") {
        Some(Value::String(s)) => return s.clone(),
        Some(Value::Null) | None => {}
        Some(other) => return other.to_string(),
    }
    if let Some(s) = item
        .pointer("/snippet/topLevelComment/snippet/textDisplay")
        .and_then(Value::as_str)
    {
        return s.to_string();
    }
    item.to_string()
}

/// Normalize an upstream `result` value into an ordered comment list.
///
/// Rules, first match wins:
/// 1. absent or null fails with [`AssistError::EmptyResult`];
/// 2. an array maps element-wise via [`element_text`], preserving length and
///    order (including zero-length);
/// 3. a string splits on line breaks (`\r\n` or `\n`), trimming each piece
///    and dropping empties;
/// 4. an object with an array `comments` field keeps string elements as-is
///    and serializes the rest;
/// 5. anything else becomes a one-element list holding its serialization.
///
/// Pure and idempotent; serialization falls back to compact JSON and cannot
/// fail.
pub fn normalize_result(result: Option<&Value>) -> Result<Vec<String>, AssistError> {
    match classify(result) {
        ResultShape::Missing => Err(AssistError::EmptyResult),
        ResultShape::Sequence(items) => Ok(items.iter().map(element_text).collect()),
        ResultShape::Text(text) => Ok(text
            .lines()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()),
        ResultShape::CommentsObject(items) => Ok(items
            .iter()
            .map(|comment| match comment {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()),
        ResultShape::Other(value) => Ok(vec![value.to_string()]),
    }
}
