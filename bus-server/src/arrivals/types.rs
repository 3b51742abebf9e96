//! Bus arrival API response DTOs.
//!
//! These map directly to the JSON returned by the arrivals endpoint.
//! Only `services[].no`, `operator` and `next` are required; the rest is
//! optional because the API omits fields for services without live data.

use serde::{Deserialize, Serialize};

/// Response from `GET /?id=<stop>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArrivalsResponse {
    /// Services calling at the stop, in upstream order.
    #[serde(default)]
    pub services: Vec<ServiceArrival>,
}

/// One bus service at the stop.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceArrival {
    /// Service number (e.g. "10", "176A").
    pub no: String,

    /// Operator code (e.g. "SBST").
    pub operator: String,

    /// The next bus. Absent when the service is not currently running.
    pub next: Option<NextBus>,

    /// The bus after next.
    pub subsequent: Option<NextBus>,
}

/// Estimate for a single bus.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NextBus {
    /// Estimated arrival, RFC 3339 with offset (e.g. "2026-10-18T14:32:10+08:00").
    pub time: String,

    /// Milliseconds from the upstream's clock to arrival.
    pub duration_ms: Option<i64>,

    /// Stop code where this trip started.
    pub origin_code: Option<String>,

    /// Stop code where this trip terminates.
    pub destination_code: String,

    /// Crowding level ("SEA", "SDA", "LSD").
    pub load: Option<String>,

    /// Vehicle type ("SD", "DD", "BD").
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,

    /// Accessibility feature ("WAB" for wheelchair accessible).
    pub feature: Option<String>,
}

/// Error body some upstream deployments send with 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl UpstreamErrorBody {
    /// The most specific message available.
    pub fn into_message(self) -> Option<String> {
        let nonblank = |m: &String| !m.trim().is_empty();
        self.message.filter(nonblank).or(self.error.filter(nonblank))
    }
}
