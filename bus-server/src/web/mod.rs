//! Web layer for the bus arrival board.
//!
//! Serves the board page and a JSON view of the same query.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
