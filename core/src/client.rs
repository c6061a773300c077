//! Request builders for the APOD and Custom Search endpoints.
//!
//! # Design
//! Building is kept apart from executing, as in `http`: these functions only
//! read `Config` and return `HttpRequest` values. The orchestrator hands them
//! to a `Transport` through `http::call`.

use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{self, HttpRequest, Transport};

/// `GET <apod_endpoint>?api_key=<nasa_api_key>`
pub fn build_apod_request(config: &Config) -> HttpRequest {
    HttpRequest::get(&config.apod_endpoint).query("api_key", &config.nasa_api_key)
}

/// `GET <search_endpoint>?key=<google_api_key>&cx=<search_engine_id>&q=<query>`
pub fn build_search_request(config: &Config, query: &str) -> HttpRequest {
    HttpRequest::get(&config.search_endpoint)
        .query("key", &config.google_api_key)
        .query("cx", &config.search_engine_id)
        .query("q", query)
}

pub fn fetch_apod<T: Transport + ?Sized>(
    config: &Config,
    transport: &T,
) -> Result<Value, ApiError> {
    http::call(transport, &build_apod_request(config))
}

pub fn fetch_search<T: Transport + ?Sized>(
    config: &Config,
    transport: &T,
    query: &str,
) -> Result<Value, ApiError> {
    http::call(transport, &build_search_request(config, query))
}
