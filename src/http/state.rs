//! Application state for the HTTP server.

use crate::provider::PlanetDataProvider;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream planetary-data provider client
    pub provider: Arc<dyn PlanetDataProvider>,
}

impl AppState {
    /// Create a new application state with the given provider.
    pub fn new(provider: Arc<dyn PlanetDataProvider>) -> Self {
        Self { provider }
    }
}
