//! Shape checks for the two upstream payloads.
//!
//! Both checks return `bool`. A payload that fails is not an error; the
//! orchestrator decides what to do with it.

use serde_json::Value;

/// Fields every usable APOD record must carry as non-blank strings.
pub const REQUIRED_APOD_FIELDS: [&str; 4] = ["title", "url", "date", "explanation"];

/// True iff `record` is an object whose required fields are all strings
/// that are non-empty after trimming. Extra fields are ignored.
pub fn is_valid_apod(record: &Value) -> bool {
    let Some(object) = record.as_object() else {
        return false;
    };
    REQUIRED_APOD_FIELDS.iter().all(|field| {
        object
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    })
}

/// True iff `result.items` is an array with at least one element.
pub fn is_valid_search(result: &Value) -> bool {
    result
        .get("items")
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty())
}
