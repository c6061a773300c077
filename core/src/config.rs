//! Startup configuration: API credentials, endpoints and the request timeout.
//!
//! `Config` is built once and passed by reference to everything that needs
//! it. `from_lookup` takes any `name -> value` function so tests never touch
//! the process environment.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const NASA_API_KEY: &str = "nasa_api_key";
pub const GOOGLE_API_KEY: &str = "google_api_key";
pub const SEARCH_ENGINE_ID: &str = "search_engine_id";
pub const APOD_ENDPOINT: &str = "apod_endpoint";
pub const SEARCH_ENDPOINT: &str = "search_endpoint";
pub const HTTP_TIMEOUT_SECS: &str = "http_timeout_secs";

pub const DEFAULT_APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub nasa_api_key: String,
    pub google_api_key: String,
    pub search_engine_id: String,
    pub apod_endpoint: String,
    pub search_endpoint: String,
    pub timeout: Duration,
}

impl Config {
    /// Build a config with the public endpoints and the default timeout.
    pub fn new(nasa_api_key: &str, google_api_key: &str, search_engine_id: &str) -> Self {
        Self {
            nasa_api_key: nasa_api_key.to_string(),
            google_api_key: google_api_key.to_string(),
            search_engine_id: search_engine_id.to_string(),
            apod_endpoint: DEFAULT_APOD_ENDPOINT.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point both APIs at another host, e.g. a local mock server.
    pub fn with_endpoints(mut self, apod_endpoint: &str, search_endpoint: &str) -> Self {
        self.apod_endpoint = normalize_endpoint(apod_endpoint);
        self.search_endpoint = normalize_endpoint(search_endpoint);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every variable through `lookup`.
    ///
    /// Required credentials are checked in a fixed order and the first
    /// missing one is reported. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::Missing(name.to_string()))
        };

        let nasa_api_key = required(NASA_API_KEY)?;
        let google_api_key = required(GOOGLE_API_KEY)?;
        let search_engine_id = required(SEARCH_ENGINE_ID)?;

        let apod_endpoint = lookup(APOD_ENDPOINT)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APOD_ENDPOINT.to_string());
        let search_endpoint = lookup(SEARCH_ENDPOINT)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string());

        let timeout = match lookup(HTTP_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(HTTP_TIMEOUT_SECS, &raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            nasa_api_key,
            google_api_key,
            search_engine_id,
            apod_endpoint: normalize_endpoint(&apod_endpoint),
            search_endpoint: normalize_endpoint(&search_endpoint),
            timeout,
        })
    }
}

/// Parse a positive number of seconds.
fn parse_timeout(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        name: name.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let secs: u64 = raw.trim().parse().map_err(|_| invalid("expected a whole number of seconds"))?;
    if secs == 0 {
        return Err(invalid("timeout must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}

// Keys stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("nasa_api_key", &"<redacted>")
            .field("google_api_key", &"<redacted>")
            .field("search_engine_id", &"<redacted>")
            .field("apod_endpoint", &self.apod_endpoint)
            .field("search_endpoint", &self.search_endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
