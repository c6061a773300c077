//! The fetch → validate → search → validate → combine sequence.
//!
//! # Design
//! Network and configuration faults come back as `Err`. A rejected APOD
//! record is not an error: it is the `Outcome::ApodRejected` terminal state,
//! reached before any search request is made.

use log::{info, warn};
use serde_json::Value;

use crate::client;
use crate::combine::combine;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::CombinedRecord;
use crate::validate::{is_valid_apod, is_valid_search};

/// How a run ended when no transport error occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Combined(CombinedRecord),
    /// The APOD payload failed validation; the search API was never called.
    ApodRejected { apod: Value },
}

impl Outcome {
    pub fn combined(&self) -> Option<&CombinedRecord> {
        match self {
            Outcome::Combined(record) => Some(record),
            Outcome::ApodRejected { .. } => None,
        }
    }
}

pub fn run<T: Transport + ?Sized>(config: &Config, transport: &T) -> Result<Outcome, ApiError> {
    let apod = client::fetch_apod(config, transport)?;
    if !is_valid_apod(&apod) {
        warn!("APOD payload is missing a required field; skipping search");
        return Ok(Outcome::ApodRejected { apod });
    }

    // Validated above, so the title is a non-blank string.
    let title = apod["title"].as_str().unwrap_or_default().to_string();
    info!("APOD for {}: {title}", apod["date"].as_str().unwrap_or_default());

    let search = client::fetch_search(config, transport, &title)?;
    let search_is_valid = is_valid_search(&search);
    if search_is_valid {
        info!("search returned {} items", search["items"].as_array().map_or(0, Vec::len));
    } else {
        warn!("search for {title:?} returned no items");
    }

    Ok(Outcome::Combined(combine(apod, &search, search_is_valid)))
}
