//! Conversion from API DTOs to domain records.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::ArrivalRecord;

use super::error::ArrivalsError;
use super::types::{ArrivalsResponse, ServiceArrival};

/// Convert an arrivals response into domain records, in upstream order.
///
/// Services with no `next` estimate are not running and are dropped.
pub fn convert_response(response: &ArrivalsResponse) -> Result<Vec<ArrivalRecord>, ArrivalsError> {
    let mut records = Vec::with_capacity(response.services.len());

    for service in &response.services {
        match convert_service(service)? {
            Some(record) => records.push(record),
            None => debug!(service = %service.no, "skipping service with no arrival estimate"),
        }
    }

    Ok(records)
}

fn convert_service(service: &ServiceArrival) -> Result<Option<ArrivalRecord>, ArrivalsError> {
    let Some(next) = &service.next else {
        return Ok(None);
    };

    let next_arrival = parse_arrival_time(&next.time).ok_or_else(|| ArrivalsError::InvalidTime {
        service: service.no.clone(),
        value: next.time.clone(),
    })?;

    Ok(Some(ArrivalRecord {
        service_number: service.no.clone(),
        operator: service.operator.clone(),
        destination_stop_id: next.destination_code.clone(),
        next_arrival,
    }))
}

fn parse_arrival_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::types::NextBus;
    use chrono::TimeZone;

    fn next_bus(time: &str, destination: &str) -> NextBus {
        NextBus {
            time: time.to_string(),
            duration_ms: None,
            origin_code: None,
            destination_code: destination.to_string(),
            load: None,
            vehicle_type: None,
            feature: None,
        }
    }

    fn service(no: &str, next: Option<NextBus>) -> ServiceArrival {
        ServiceArrival {
            no: no.to_string(),
            operator: "SBST".to_string(),
            next,
            subsequent: None,
        }
    }

    #[test]
    fn converts_in_upstream_order() {
        let response = ArrivalsResponse {
            services: vec![
                service("75", Some(next_bus("2026-10-18T14:40:00+08:00", "75009"))),
                service("10", Some(next_bus("2026-10-18T14:32:10+08:00", "10009"))),
            ],
        };

        let records = convert_response(&response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].service_number, "75");
        assert_eq!(records[1].service_number, "10");
        assert_eq!(records[1].destination_stop_id, "10009");
        assert_eq!(records[1].operator, "SBST");
    }

    #[test]
    fn normalises_times_to_utc() {
        let response = ArrivalsResponse {
            services: vec![service(
                "10",
                Some(next_bus("2026-10-18T14:32:10+08:00", "10009")),
            )],
        };

        let records = convert_response(&response).unwrap();
        assert_eq!(
            records[0].next_arrival,
            Utc.with_ymd_and_hms(2026, 10, 18, 6, 32, 10).unwrap()
        );
    }

    #[test]
    fn drops_services_without_estimate() {
        let response = ArrivalsResponse {
            services: vec![
                service("961M", None),
                service("10", Some(next_bus("2026-10-18T14:32:10+08:00", "10009"))),
            ],
        };

        let records = convert_response(&response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service_number, "10");
    }

    #[test]
    fn rejects_unparseable_time() {
        let response = ArrivalsResponse {
            services: vec![service("10", Some(next_bus("14:32", "10009")))],
        };

        let err = convert_response(&response).unwrap_err();
        assert!(matches!(err, ArrivalsError::InvalidTime { ref service, .. } if service == "10"));
    }

    #[test]
    fn empty_response() {
        let records = convert_response(&ArrivalsResponse { services: vec![] }).unwrap();
        assert!(records.is_empty());
    }
}
