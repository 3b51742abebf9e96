//! Askama templates and the board's display state.

use askama::Template;
use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{ArrivalRecord, Eta, GmtOffset};
use crate::query::{ArrivalBoard, QueryOutcome};

/// Format of the "as of" timestamp in the info line.
const AS_OF_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The board: input form plus warning, info and table regions.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Value to refill the input with.
    pub stop_input: String,
    pub display: DisplayState,
}

/// Error page for failures the board cannot show as a warning.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub stop_input: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// What each region of the board shows.
///
/// The board has three regions: a warning line, an info line, and the
/// arrivals table. In practice they are in one of three states: all
/// hidden (before any query), warning only, or info plus table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub warning: Option<String>,
    pub info: Option<String>,
    pub rows: Vec<ArrivalRow>,
    pub table_visible: bool,
}

impl DisplayState {
    /// Initial state: nothing shown.
    pub fn hidden() -> Self {
        Self {
            warning: None,
            info: None,
            rows: Vec::new(),
            table_visible: false,
        }
    }

    /// Show a warning; info and table are hidden.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            warning: Some(message.into()),
            ..Self::hidden()
        }
    }

    /// Show the info line and the arrivals table.
    pub fn board(board: &ArrivalBoard, offset: FixedOffset) -> Self {
        let rows = board
            .records
            .iter()
            .map(|r| ArrivalRow::from_record(r, board.as_of))
            .collect();

        Self {
            warning: None,
            info: Some(as_of_message(board.as_of, offset)),
            rows,
            table_visible: true,
        }
    }

    /// Display state for a query outcome, with times shown at `offset`.
    pub fn from_outcome(outcome: &QueryOutcome, offset: FixedOffset) -> Self {
        match outcome {
            QueryOutcome::Warning(w) => Self::warning(w.to_string()),
            QueryOutcome::Arrivals(board) => Self::board(board, offset),
        }
    }

    /// Whether the warning region is visible.
    pub fn warning_visible(&self) -> bool {
        self.warning.is_some()
    }

    /// Whether the info region is visible.
    pub fn info_visible(&self) -> bool {
        self.info.is_some()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::hidden()
    }
}

/// One row of the arrivals table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRow {
    pub service_number: String,
    pub operator: String,
    pub destination_stop_id: String,
    pub eta: Eta,
    pub next_arrival: DateTime<Utc>,
}

impl ArrivalRow {
    /// Create from a domain record, with the ETA relative to `now`.
    pub fn from_record(record: &ArrivalRecord, now: DateTime<Utc>) -> Self {
        Self {
            service_number: record.service_number.clone(),
            operator: record.operator.clone(),
            destination_stop_id: record.destination_stop_id.clone(),
            eta: Eta::until(record.next_arrival, now),
            next_arrival: record.next_arrival,
        }
    }

    /// Text for the minutes column: "Now" or a whole number.
    pub fn minutes(&self) -> String {
        self.eta.to_string()
    }
}

/// "Data is updated as of 18/10/2026, 14:30:00, GMT+08:00."
pub fn as_of_message(now: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = now.with_timezone(&offset);
    format!(
        "Data is updated as of {}, GMT{}.",
        local.format(AS_OF_FORMAT),
        GmtOffset::from_fixed(offset)
    )
}
