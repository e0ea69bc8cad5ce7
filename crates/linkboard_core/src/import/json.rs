//! JSON bookmark decoding.
//!
//! Accepts either a bare array of bookmark-shaped objects or an envelope
//! object carrying a `bookmarks` array (the crate's own export shape). Any
//! other shape, including unparseable input, yields zero candidates.

use super::BookmarkDraft;
use serde_json::Value;

/// Decodes a JSON payload into candidate records.
pub fn parse(input: &str) -> Vec<BookmarkDraft> {
    let Ok(value) = serde_json::from_str::<Value>(input) else {
        return Vec::new();
    };

    let items = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("bookmarks") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items.iter().filter_map(draft_from_value).collect()
}

fn draft_from_value(value: &Value) -> Option<BookmarkDraft> {
    let object = value.as_object()?;
    let title = required_string(object.get("title"))?;
    let url = required_string(object.get("url"))?;

    Some(BookmarkDraft {
        title,
        url,
        category: optional_string(object.get("category")),
        date_added: optional_string(object.get("dateAdded")),
    })
}

fn required_string(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
