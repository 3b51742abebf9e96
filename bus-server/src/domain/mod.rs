//! Domain types for the bus arrival board.
//!
//! Values here are validated at construction, so the web and query
//! layers can pass them around without re-checking.

mod arrival;
mod eta;
mod offset;
mod stop_id;

pub use arrival::{ArrivalRecord, QueryResult};
pub use eta::{Eta, minutes_until, sort_by_eta};
pub use offset::GmtOffset;
pub use stop_id::{InputError, STOP_ID_FIELD, StopId};
