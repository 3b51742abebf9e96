//! Arrivals client error types.

/// Errors from the bus arrival client.
///
/// A query the upstream API *rejects* is not an error: it comes back as
/// `QueryResult::Failure`. These are the failures the board has no
/// sensible message for.
#[derive(Debug, thiserror::Error)]
pub enum ArrivalsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a 5xx status
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// An arrival estimate could not be parsed
    #[error("invalid arrival time {value:?} for service {service}")]
    InvalidTime { service: String, value: String },

    /// Client could not be built or mock data could not be loaded
    #[error("not configured: {0}")]
    NotConfigured(String),
}
