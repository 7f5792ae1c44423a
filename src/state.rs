//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! holds the backend client used by the forwarding routes.

use std::sync::Arc;

use crate::backend::{BackendClient, ForwardError};
use crate::config::ServerConfig;

/// Clone is required by Axum; the client is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, ForwardError> {
        Ok(Self { backend: Arc::new(BackendClient::new(config)?) })
    }
}
