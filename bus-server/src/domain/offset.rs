//! Local timezone offset as shown on the board ("GMT+08:00").

use std::fmt;

use chrono::FixedOffset;

const MINUTES_PER_HOUR: i32 = 60;

/// Offset between local time and UTC.
///
/// Stored in the "raw" convention: minutes to add to local time to get
/// UTC. Places east of Greenwich therefore have a *negative* raw offset
/// (Singapore, UTC+8, is `-480`) and display with the sign flipped.
///
/// # Examples
///
/// ```
/// use bus_server::domain::GmtOffset;
///
/// assert_eq!(GmtOffset::from_raw_minutes(-480).to_string(), "+08:00");
/// assert_eq!(GmtOffset::from_raw_minutes(300).to_string(), "-05:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GmtOffset {
    raw_minutes: i32,
}

impl GmtOffset {
    /// Build from the raw convention (UTC minus local, in minutes).
    pub fn from_raw_minutes(raw_minutes: i32) -> Self {
        Self { raw_minutes }
    }

    /// Build from a chrono offset, which counts east of UTC as positive.
    pub fn from_fixed(offset: FixedOffset) -> Self {
        Self {
            raw_minutes: -offset.local_minus_utc() / 60,
        }
    }

    /// Minutes in the raw convention.
    pub fn raw_minutes(&self) -> i32 {
        self.raw_minutes
    }
}

impl fmt::Display for GmtOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw_minutes > 0 { '-' } else { '+' };
        let abs = self.raw_minutes.unsigned_abs() as i32;
        write!(
            f,
            "{sign}{:02}:{:02}",
            abs / MINUTES_PER_HOUR,
            abs % MINUTES_PER_HOUR
        )
    }
}
