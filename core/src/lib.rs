//! Fetch NASA's Astronomy Picture of the Day and pair it with Google Custom
//! Search results for its title.
//!
//! # Overview
//! `orchestrator::run` fetches the APOD record, checks it, searches for its
//! title, checks the search payload and merges both into a
//! `CombinedRecord`. All I/O goes through the `Transport` trait; the
//! validators and the combiner are pure.
//!
//! # Design
//! - `Config` is built once and passed by reference; nothing reads the
//!   environment behind the caller's back.
//! - Transport and configuration faults are `Err` values. Payload shape
//!   checks return `bool` and never fail.
//! - Requests are plain data (`HttpRequest`), so tests can script responses
//!   and count calls without a network.

pub mod client;
pub mod combine;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod transport;
pub mod types;
pub mod validate;

pub use combine::combine;
pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use http::{call, HttpRequest, HttpResponse, Transport};
pub use orchestrator::{run, Outcome};
pub use transport::UreqTransport;
pub use types::{CombinedRecord, GoogleSearchData, NO_SEARCH_RESULTS};
pub use validate::{is_valid_apod, is_valid_search};
