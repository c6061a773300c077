//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. Building a request and
//! interpreting a response are pure functions; only a `Transport` touches
//! the network. Tests swap in a scripted transport, the binary uses
//! `UreqTransport`.
//!
//! `HttpRequest::url` never carries the query string. Query parameters live
//! in `query` so API keys stay out of error messages and logs.

use log::debug;
use serde_json::Value;

use crate::error::ApiError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            query: Vec::new(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Look up the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one request and hands back whatever the server said.
///
/// Implementations must return non-200 responses as `Ok`; only failures to
/// get a response at all are `Err(ApiError::Transport)`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Turn a response into JSON, or into `ApiError::Http` for any status but 200.
pub fn parse_json(response: &HttpResponse, url: &str) -> Result<Value, ApiError> {
    if response.status != 200 {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body.clone(),
            url: url.to_string(),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Execute `request` and parse the JSON body. No retries.
pub fn call<T: Transport + ?Sized>(
    transport: &T,
    request: &HttpRequest,
) -> Result<Value, ApiError> {
    debug!("GET {} ({} query params)", request.url, request.query.len());
    let response = transport.execute(request)?;
    debug!("{} answered {} ({} bytes)", request.url, response.status, response.body.len());
    parse_json(&response, &request.url)
}
