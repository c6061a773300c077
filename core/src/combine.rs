//! Merges an APOD record with its search results.

use serde_json::Value;

use crate::types::{CombinedRecord, GoogleSearchData};

/// Build the output record. Pure: `apod` is moved in unchanged and `search`
/// is only read.
///
/// With `search_is_valid` set, the result carries `search.items` in order;
/// otherwise it carries the placeholder message whatever `search` holds.
pub fn combine(apod: Value, search: &Value, search_is_valid: bool) -> CombinedRecord {
    let google_search_data = if search_is_valid {
        let items = search
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        GoogleSearchData::Items(items)
    } else {
        GoogleSearchData::not_found()
    };

    CombinedRecord {
        apod_data: apod,
        google_search_data,
    }
}
