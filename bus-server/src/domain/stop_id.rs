//! Bus stop identifier type.

use std::fmt;

/// Name of the form field carrying the stop identifier, used in warnings.
pub const STOP_ID_FIELD: &str = "Bus Stop ID";

/// Error returned when the user-supplied stop identifier is rejected.
///
/// The display text is shown to the user as-is in the warning region.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The field was empty or whitespace-only.
    #[error("Missing required field(s). [{field}]")]
    MissingField { field: &'static str },

    /// The field was present but not an integer.
    #[error("Invalid input format (Numeric only) on the following field(s). [{field}].")]
    InvalidFormat { field: &'static str },
}

/// A validated bus stop identifier.
///
/// Any integer is accepted: an optional sign followed by ASCII digits.
/// Whether such a stop exists is for the arrivals API to decide. The
/// value is kept as text rather than converted to an integer because
/// leading zeros are significant (`01012` and `1012` are different stops).
///
/// # Examples
///
/// ```
/// use bus_server::domain::{InputError, StopId};
///
/// let stop = StopId::parse(" 10009 ").unwrap();
/// assert_eq!(stop.as_str(), "10009");
///
/// assert!(matches!(StopId::parse("   "), Err(InputError::MissingField { .. })));
/// assert!(matches!(StopId::parse("abc12"), Err(InputError::InvalidFormat { .. })));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Validate raw form input.
    ///
    /// Surrounding whitespace is ignored. The remainder must be an
    /// integer: an optional `+` or `-` and one or more ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InputError::MissingField {
                field: STOP_ID_FIELD,
            });
        }

        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::InvalidFormat {
                field: STOP_ID_FIELD,
            });
        }

        Ok(StopId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
