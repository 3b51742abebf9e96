//! Estimated time of arrival handling.
//!
//! Arrival estimates are absolute timestamps. The board shows them as a
//! whole number of minutes from "now", rounded up, with anything under a
//! minute displayed as "Now".

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::ArrivalRecord;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Minutes until an arrival, as shown in the board's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    /// Due within the next minute, or already overdue.
    Now,
    /// Due in this many minutes (always at least 1).
    Minutes(i64),
}

impl Eta {
    /// Compute the ETA of `arrival` as seen at `now`.
    pub fn until(arrival: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mins = minutes_until(arrival, now);
        if mins < 1 { Eta::Now } else { Eta::Minutes(mins) }
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Now => f.write_str("Now"),
            Eta::Minutes(m) => write!(f, "{m}"),
        }
    }
}

/// Minutes from `now` until `arrival`, rounded towards positive infinity.
///
/// Negative when the arrival is already in the past.
///
/// ```
/// use bus_server::domain::minutes_until;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// assert_eq!(minutes_until(now + Duration::seconds(61), now), 2);
/// assert_eq!(minutes_until(now + Duration::seconds(60), now), 1);
/// assert_eq!(minutes_until(now - Duration::seconds(90), now), -1);
/// ```
pub fn minutes_until(arrival: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (arrival - now).num_milliseconds();
    // Integer division truncates towards zero, which is already the
    // ceiling for negative values.
    let whole = millis / MILLIS_PER_MINUTE;
    if millis % MILLIS_PER_MINUTE > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Order records closest arrival first.
///
/// The sort is stable: records with identical estimates keep their
/// upstream order.
pub fn sort_by_eta(records: &mut [ArrivalRecord], now: DateTime<Utc>) {
    records.sort_by_key(|r| time_to_arrival(r, now));
}

fn time_to_arrival(record: &ArrivalRecord, now: DateTime<Utc>) -> Duration {
    record.next_arrival - now
}
