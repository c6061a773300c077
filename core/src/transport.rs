//! Blocking `Transport` backed by `ureq`.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

const USER_AGENT: &str = concat!("apod-search/", env!("CARGO_PKG_VERSION"));

/// Executes requests over the network with a single global timeout.
///
/// ureq's status-as-error behavior is disabled so 4xx/5xx come back as
/// data and `parse_json` decides what they mean.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let transport_error = |e: ureq::Error| ApiError::Transport {
            url: request.url.clone(),
            message: e.to_string(),
        };

        let mut builder = self.agent.get(&request.url).header("user-agent", USER_AGENT);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }

        let mut response = builder.call().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(transport_error)?;

        Ok(HttpResponse { status, body })
    }
}
