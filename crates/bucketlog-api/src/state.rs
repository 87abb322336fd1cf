//! Shared application state.

use std::sync::Arc;

use bucketlog_core::id::IdGenerator;
use bucketlog_core::session::SessionFactory;

/// Application state shared across all request handlers.
///
/// Holds no mutable data of its own: all shared state lives behind the
/// session factory.
#[derive(Clone)]
pub struct AppState {
    /// Opens one storage session per request.
    pub sessions: Arc<dyn SessionFactory>,
    /// Assigns ids to new events.
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionFactory>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { sessions, ids }
    }
}
