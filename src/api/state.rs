//! Application State
//!
//! Shared state accessible by all handlers.

use std::sync::Arc;
use std::time::Instant;

use super::demo::DemoContent;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Documents served on the data routes
    pub content: Arc<DemoContent>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(content: DemoContent) -> Self {
        Self {
            content: Arc::new(content),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
