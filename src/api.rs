//! HTTP delivery layer
//!
//! JSON endpoints over the session registry. Rendering of reports and
//! errors is left to the client.

mod handlers;
mod sessions;
mod types;

pub use handlers::create_router;
pub use sessions::SessionManager;

use crate::config::Config;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(config)),
        }
    }
}
