// Application state module
// Read-only configuration plus the connection counter owned by the server layer

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state shared by every connection task
///
/// Request handling only reads `config`; the counter belongs to the accept loop.
pub struct AppState {
    pub config: Config,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
