//! Shared server state.
//!
//! Handlers only read it. The data store re-reads files on every call, so
//! nothing here needs a lock.

use std::sync::Arc;
use std::time::Instant;

use data::DataStore;

/// State shared across all handlers.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Fixture directory access.
    pub store: Arc<DataStore>,
    /// Server start time, for uptime.
    started_at: Instant,
}

impl ServerState {
    /// Create state around a data store.
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
