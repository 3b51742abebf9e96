//! Application state for the web layer.

use std::sync::Arc;

use chrono::{FixedOffset, Local};

use crate::arrivals::ArrivalsBackend;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where arrivals come from (live API or mock files)
    pub arrivals: Arc<ArrivalsBackend>,

    /// Timezone to show times in. `None` uses the server's local zone.
    pub display_offset: Option<FixedOffset>,
}

impl AppState {
    /// Create a new app state showing times in the server's local zone.
    pub fn new(arrivals: ArrivalsBackend) -> Self {
        Self {
            arrivals: Arc::new(arrivals),
            display_offset: None,
        }
    }

    /// Show times at a fixed offset instead of the local zone.
    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = Some(offset);
        self
    }

    /// The offset to render the next response with.
    pub fn offset_now(&self) -> FixedOffset {
        self.display_offset
            .unwrap_or_else(|| *Local::now().offset())
    }
}
