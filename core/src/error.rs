//! Error types for configuration loading and the two upstream APIs.
//!
//! # Design
//! Configuration faults and transport faults are kept in separate enums so
//! callers can tell "nothing was attempted" from "a request went wrong."
//! Payload shape problems are not errors at all; the validators report them
//! as `bool`.

use thiserror::Error;

/// Raised while building a `Config`, always before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("environment variable '{0}' is not set")]
    Missing(String),

    /// An optional variable is set but cannot be used.
    #[error("environment variable '{name}' has invalid value '{value}': {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Errors returned by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("HTTP {status} from {url}: {body}")]
    Http { status: u16, body: String, url: String },

    /// No response was received (DNS, connect, TLS, timeout, ...).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A 200 response whose body is not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
