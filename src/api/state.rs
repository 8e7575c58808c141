//! Application state shared by every request.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Connector;

/// Application state.
///
/// Holds no database connection itself: each request opens its own
/// through `connector` (see `db_session_middleware`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub connector: Arc<dyn Connector>,
}

impl AppState {
    pub fn new(config: Config, connector: Arc<dyn Connector>) -> Self {
        Self {
            config: Arc::new(config),
            connector,
        }
    }
}
