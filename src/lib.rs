//! Asynchronous REST client for the CampusLink career platform backend.
//!
//! The crate is a thin façade over the platform's HTTP API: a configured
//! [`http_client::HTTPClient`] carrying the bearer credential and the
//! session-expiry policy, plus one request type per endpoint under
//! [`http_request`].

pub use chrono;
pub use reqwest;
pub use serde;
pub use serde_json;

pub mod common;
pub mod http_client;
pub mod http_request;
pub mod http_response;
pub mod session;
pub mod util;
