//! Mock arrivals client for development without network access.
//!
//! Loads sample responses from JSON files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{Duration, SecondsFormat, Utc};

use crate::domain::{QueryResult, StopId};

use super::convert::convert_response;
use super::error::ArrivalsError;
use super::source::ArrivalSource;
use super::types::ArrivalsResponse;

/// Message returned for stops with no mock file, matching the live API.
const UNKNOWN_STOP_MESSAGE: &str = "Invalid bus stop";

/// Mock arrivals client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockArrivalsClient {
    /// Pre-loaded responses, keyed by stop.
    responses: Arc<HashMap<StopId, ArrivalsResponse>>,
}

impl MockArrivalsClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{stop}.json` (e.g., `10009.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ArrivalsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            ArrivalsError::NotConfigured(format!(
                "failed to read mock data directory {:?}: {}",
                data_dir, e
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                ArrivalsError::NotConfigured(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "10009.json" -> "10009"
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    ArrivalsError::NotConfigured(format!("invalid filename: {:?}", path))
                })?;

            let stop = StopId::parse(stem).map_err(|_| {
                ArrivalsError::NotConfigured(format!("invalid stop id in filename: {}", stem))
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| {
                ArrivalsError::NotConfigured(format!("failed to read {:?}: {}", path, e))
            })?;

            let response: ArrivalsResponse =
                serde_json::from_str(&json).map_err(|e| ArrivalsError::Json {
                    message: format!("failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            responses.insert(stop, response);
        }

        if responses.is_empty() {
            return Err(ArrivalsError::NotConfigured(format!(
                "no mock arrival files found in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Get arrivals for a stop.
    ///
    /// Estimates that carry a `duration_ms` are re-anchored to the current
    /// time so the board shows sensible minutes. Others are served as-is.
    pub fn get_arrivals(&self, stop: &StopId) -> Result<QueryResult, ArrivalsError> {
        let Some(response) = self.responses.get(stop) else {
            return Ok(QueryResult::Failure {
                message: UNKNOWN_STOP_MESSAGE.to_string(),
            });
        };

        let response = reanchor(response);
        convert_response(&response).map(QueryResult::Success)
    }

    /// List stops available in the mock data.
    pub fn available_stops(&self) -> Vec<StopId> {
        let mut stops: Vec<StopId> = self.responses.keys().cloned().collect();
        stops.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        stops
    }
}

impl ArrivalSource for MockArrivalsClient {
    async fn fetch_arrivals(&self, stop: &StopId) -> Result<QueryResult, ArrivalsError> {
        self.get_arrivals(stop)
    }
}

fn reanchor(response: &ArrivalsResponse) -> ArrivalsResponse {
    let now = Utc::now();
    let mut response = response.clone();

    for service in &mut response.services {
        for bus in [&mut service.next, &mut service.subsequent]
            .into_iter()
            .flatten()
        {
            if let Some(ms) = bus.duration_ms {
                bus.time =
                    (now + Duration::milliseconds(ms)).to_rfc3339_opts(SecondsFormat::Secs, true);
            }
        }
    }

    response
}
