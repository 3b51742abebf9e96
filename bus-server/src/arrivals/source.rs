//! The seam between the query flow and wherever arrivals come from.

use std::future::Future;

use crate::domain::{QueryResult, StopId};

use super::client::ArrivalsClient;
use super::error::ArrivalsError;
use super::mock::MockArrivalsClient;

/// Something that can answer "what is arriving at this stop?".
///
/// Implemented by the live HTTP client and the file-backed mock, and by
/// test doubles in the query tests.
pub trait ArrivalSource {
    /// Fetch arrivals for one stop. Called at most once per query.
    fn fetch_arrivals(
        &self,
        stop: &StopId,
    ) -> impl Future<Output = Result<QueryResult, ArrivalsError>> + Send;
}

/// The arrival source chosen at start-up.
#[derive(Debug, Clone)]
pub enum ArrivalsBackend {
    /// Live public API.
    Live(ArrivalsClient),
    /// JSON files on disk.
    Mock(MockArrivalsClient),
}

impl ArrivalSource for ArrivalsBackend {
    async fn fetch_arrivals(&self, stop: &StopId) -> Result<QueryResult, ArrivalsError> {
        match self {
            ArrivalsBackend::Live(client) => client.fetch_arrivals(stop).await,
            ArrivalsBackend::Mock(client) => client.fetch_arrivals(stop).await,
        }
    }
}
