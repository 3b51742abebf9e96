//! Bus arrival HTTP client.
//!
//! Queries the public arrivals API for a single stop and converts the
//! answer into domain records. There is no retry: a failed
//! request is reported once and the user resubmits.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::domain::{QueryResult, StopId};

use super::convert::convert_response;
use super::error::ArrivalsError;
use super::source::ArrivalSource;
use super::types::{ArrivalsResponse, UpstreamErrorBody};

/// Default base URL for the arrivals API.
pub const DEFAULT_BASE_URL: &str = "https://arrivelah2.busrouter.sg";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Message used when the upstream rejects a stop without explaining why.
const DEFAULT_FAILURE_MESSAGE: &str = "Invalid bus stop";

/// Configuration for the arrivals client.
#[derive(Debug, Clone)]
pub struct ArrivalsClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ArrivalsClientConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ArrivalsClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bus arrivals API client.
#[derive(Debug, Clone)]
pub struct ArrivalsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArrivalsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ArrivalsClientConfig) -> Result<Self, ArrivalsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch next arrivals for a stop.
    pub async fn get_arrivals(&self, stop: &StopId) -> Result<QueryResult, ArrivalsError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("id", stop.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(stop = %stop, status = status.as_u16(), "arrivals response");
        interpret_response(status, &body)
    }
}

impl ArrivalSource for ArrivalsClient {
    async fn fetch_arrivals(&self, stop: &StopId) -> Result<QueryResult, ArrivalsError> {
        self.get_arrivals(stop).await
    }
}

/// Map an HTTP status and body to a query result.
///
/// - 2xx: the body is an arrivals response.
/// - 4xx: the upstream rejected the stop; its message is passed through.
/// - 5xx and anything else: an error the board does not handle.
pub(crate) fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<QueryResult, ArrivalsError> {
    if status.is_success() {
        let parsed: ArrivalsResponse =
            serde_json::from_str(body).map_err(|e| ArrivalsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;
        return convert_response(&parsed).map(QueryResult::Success);
    }

    if status.is_client_error() {
        let message = serde_json::from_str::<UpstreamErrorBody>(body)
            .ok()
            .and_then(UpstreamErrorBody::into_message)
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        return Ok(QueryResult::Failure { message });
    }

    warn!(status = status.as_u16(), "arrivals API returned an error status");
    Err(ArrivalsError::Server {
        status: status.as_u16(),
        message: body.chars().take(500).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = ArrivalsClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = ArrivalsClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation_trims_trailing_slash() {
        let config = ArrivalsClientConfig::new().with_base_url("http://localhost:8080/");
        let client = ArrivalsClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn success_body_becomes_records() {
        let body = r#"{"services":[{"no":"10","operator":"SBST","next":{"time":"2026-10-18T14:32:10+08:00","destination_code":"10009"}}]}"#;

        let result = interpret_response(StatusCode::OK, body).unwrap();
        match result {
            QueryResult::Success(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].service_number, "10");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn success_with_no_services() {
        let result = interpret_response(StatusCode::OK, r#"{"services":[]}"#).unwrap();
        assert_eq!(result, QueryResult::Success(vec![]));
    }

    #[test]
    fn client_error_passes_message_through() {
        let body = r#"{"message":"Invalid bus stop"}"#;
        let result = interpret_response(StatusCode::BAD_REQUEST, body).unwrap();
        assert_eq!(
            result,
            QueryResult::Failure {
                message: "Invalid bus stop".to_string()
            }
        );
    }

    #[test]
    fn client_error_without_message_uses_default() {
        let result = interpret_response(StatusCode::NOT_FOUND, "Not Found").unwrap();
        assert_eq!(
            result,
            QueryResult::Failure {
                message: DEFAULT_FAILURE_MESSAGE.to_string()
            }
        );
        assert!(!result.is_success());
    }

    #[test]
    fn server_error_is_not_a_query_result() {
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();
        assert!(matches!(err, ArrivalsError::Server { status: 500, .. }));
    }

    #[test]
    fn malformed_success_body_is_json_error() {
        let err = interpret_response(StatusCode::OK, "<html>").unwrap_err();
        match err {
            ArrivalsError::Json { body, .. } => assert_eq!(body.as_deref(), Some("<html>")),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    // Requests against the live API are not run here; the mock client
    // covers the end-to-end path.
}
