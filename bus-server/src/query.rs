//! Arrivals query flow.
//!
//! Validates the raw stop input, asks the arrival source once, and orders
//! the answer closest arrival first. Everything the user should be told
//! instead of seeing a table comes back as a [`QueryWarning`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::arrivals::{ArrivalSource, ArrivalsError};
use crate::domain::{ArrivalRecord, InputError, QueryResult, StopId, sort_by_eta};

/// Why a query produced a warning rather than a table.
///
/// The display text is what the warning region shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryWarning {
    /// Input was missing or not numeric; no request was made.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The upstream rejected the query.
    #[error("{message}")]
    ApiFailure { message: String },

    /// The stop exists but nothing is running.
    #[error("The Bus Stop [ID: {stop}] currently has no bus service available.")]
    NoService { stop: StopId },
}

/// Arrivals for one stop, closest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalBoard {
    /// The stop that was queried.
    pub stop: StopId,

    /// Records in display order. Never empty.
    pub records: Vec<ArrivalRecord>,

    /// The instant the ordering and ETAs are relative to.
    pub as_of: DateTime<Utc>,
}

/// Result of a query the board knows how to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Warning(QueryWarning),
    Arrivals(ArrivalBoard),
}

/// Run one arrivals query for raw form input.
///
/// Validation failures return a warning without touching `source`.
/// Transport and upstream server failures are returned as `Err`: the
/// board has no message for them.
pub async fn run_query<S: ArrivalSource>(
    source: &S,
    raw_input: &str,
    now: DateTime<Utc>,
) -> Result<QueryOutcome, ArrivalsError> {
    let stop = match StopId::parse(raw_input) {
        Ok(stop) => stop,
        Err(e) => return Ok(QueryOutcome::Warning(e.into())),
    };

    let result = source.fetch_arrivals(&stop).await?;

    Ok(outcome_for(stop, result, now))
}

/// Turn an upstream result into what the board shows.
fn outcome_for(stop: StopId, result: QueryResult, now: DateTime<Utc>) -> QueryOutcome {
    match result {
        QueryResult::Failure { message } => {
            debug!(stop = %stop, reason = %message, "arrivals query rejected");
            QueryOutcome::Warning(QueryWarning::ApiFailure { message })
        }
        QueryResult::Success(records) if records.is_empty() => {
            debug!(stop = %stop, "no services at stop");
            QueryOutcome::Warning(QueryWarning::NoService { stop })
        }
        QueryResult::Success(mut records) => {
            sort_by_eta(&mut records, now);
            debug!(stop = %stop, count = records.len(), "arrivals query succeeded");
            QueryOutcome::Arrivals(ArrivalBoard {
                stop,
                records,
                as_of: now,
            })
        }
    }
}
