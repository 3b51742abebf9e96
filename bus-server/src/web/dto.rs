//! Data transfer objects for web requests and responses.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::Eta;

use super::templates::{ArrivalRow, DisplayState};

/// Query string for `/arrivals`.
#[derive(Debug, Deserialize)]
pub struct ArrivalsRequest {
    /// Raw stop input. Missing is treated the same as empty.
    #[serde(default)]
    pub id: String,
}

/// JSON body for `/arrivals`.
///
/// Mirrors the board: `warning` is set when the table would be hidden,
/// otherwise `info` and `arrivals` are.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Warning text, if the query produced one
    pub warning: Option<String>,

    /// "Data is updated as of ..." line
    pub info: Option<String>,

    /// Arrivals, closest first
    pub arrivals: Vec<ArrivalResult>,
}

/// One arrival in the JSON response.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Service number
    pub service_number: String,

    /// Operator code
    pub operator: String,

    /// Terminal stop of the trip
    pub destination_stop_id: String,

    /// Estimated arrival (RFC 3339, UTC)
    pub next_arrival: String,

    /// Whole minutes until arrival; `None` when due now
    pub minutes: Option<i64>,

    /// Text shown in the board's minutes column
    pub display: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl BoardResponse {
    /// Create from the board's display state.
    pub fn from_display(display: &DisplayState) -> Self {
        Self {
            warning: display.warning.clone(),
            info: display.info.clone(),
            arrivals: display.rows.iter().map(ArrivalResult::from_row).collect(),
        }
    }
}

impl ArrivalResult {
    /// Create from a table row.
    pub fn from_row(row: &ArrivalRow) -> Self {
        let minutes = match row.eta {
            Eta::Now => None,
            Eta::Minutes(m) => Some(m),
        };

        Self {
            service_number: row.service_number.clone(),
            operator: row.operator.clone(),
            destination_stop_id: row.destination_stop_id.clone(),
            next_arrival: row.next_arrival.to_rfc3339_opts(SecondsFormat::Secs, true),
            minutes,
            display: row.minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(eta: Eta) -> ArrivalRow {
        ArrivalRow {
            service_number: "10".into(),
            operator: "SBST".into(),
            destination_stop_id: "10009".into(),
            eta,
            next_arrival: Utc.with_ymd_and_hms(2026, 10, 18, 6, 32, 10).unwrap(),
        }
    }

    #[test]
    fn arrival_result_minutes() {
        let result = ArrivalResult::from_row(&row(Eta::Minutes(3)));
        assert_eq!(result.minutes, Some(3));
        assert_eq!(result.display, "3");
        assert_eq!(result.next_arrival, "2026-10-18T06:32:10Z");
    }

    #[test]
    fn arrival_result_now() {
        let result = ArrivalResult::from_row(&row(Eta::Now));
        assert_eq!(result.minutes, None);
        assert_eq!(result.display, "Now");
    }

    #[test]
    fn warning_response_has_no_arrivals() {
        let response = BoardResponse::from_display(&DisplayState::warning("Invalid bus stop"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["warning"], "Invalid bus stop");
        assert!(json["info"].is_null());
        assert_eq!(json["arrivals"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn missing_id_deserializes_as_empty() {
        let req: ArrivalsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.id, "");
    }
}
