//! Bus arrival API client.
//!
//! This module provides an HTTP client for the public Singapore bus
//! arrival API, plus a file-backed mock with the same interface.
//!
//! Key characteristics of the API:
//! - One request per stop: `GET /?id=<stop code>`
//! - Each service carries at most one `next` estimate of interest, as an
//!   RFC 3339 timestamp with a `+08:00` offset
//! - Very large stop codes (e.g. `100000`) can trigger a 500 from the
//!   upstream; that surfaces as `ArrivalsError::Server`

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{ArrivalsClient, ArrivalsClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ArrivalsError;
pub use mock::MockArrivalsClient;
pub use source::{ArrivalSource, ArrivalsBackend};
pub use types::{ArrivalsResponse, NextBus, ServiceArrival};
