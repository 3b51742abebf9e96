//! Arrival records returned by the bus arrival API.

use chrono::{DateTime, Utc};

/// The next arrival of one bus service at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRecord {
    /// Service number as shown on the bus (e.g. "10", "176A").
    pub service_number: String,

    /// Operator code (e.g. "SBST", "SMRT").
    pub operator: String,

    /// Stop code of the terminal stop of this trip.
    pub destination_stop_id: String,

    /// Estimated arrival of the next bus.
    pub next_arrival: DateTime<Utc>,
}

/// Outcome of an arrivals query as reported by the upstream API.
///
/// Transport and server failures are not represented here: they are
/// returned as `Err` by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// The API answered; the records are in upstream order.
    Success(Vec<ArrivalRecord>),

    /// The API rejected the query with a human-readable message.
    Failure { message: String },
}

impl QueryResult {
    /// Whether the upstream reported success.
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success(_))
    }
}
