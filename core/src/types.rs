//! Output types.
//!
//! # Design
//! The APOD record and the search items stay as `serde_json::Value`: only
//! four APOD fields are checked and everything else is passed through
//! untouched, so a typed struct would drop or reorder what upstream sent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder emitted when the search payload has no usable items.
pub const NO_SEARCH_RESULTS: &str = "No Google Search Results Found";

/// Either the search `items` in upstream order, or the placeholder message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoogleSearchData {
    Items(Vec<Value>),
    Message(String),
}

impl GoogleSearchData {
    pub fn not_found() -> Self {
        GoogleSearchData::Message(NO_SEARCH_RESULTS.to_string())
    }

    pub fn items(&self) -> Option<&[Value]> {
        match self {
            GoogleSearchData::Items(items) => Some(items),
            GoogleSearchData::Message(_) => None,
        }
    }
}

/// The merged record handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub apod_data: Value,
    pub google_search_data: GoogleSearchData,
}
