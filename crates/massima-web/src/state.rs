//! Application state.

use massima_ai::Analyzer;
use massima_core::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across handlers.
///
/// The session is the single mutable slot; it is written only while the
/// lock is held, and the lock is never held across the model call.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}
