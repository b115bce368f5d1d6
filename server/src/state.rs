//! Shared handler state: what startup learned about the backend.

use std::sync::Arc;

use portal::ConfigSource;
use serde::Serialize;

/// Body of `GET /api/status`. `backend_reachable` is `None` when no probe ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    pub backend_configured: bool,
    pub backend_source: Option<ConfigSource>,
    pub backend_reachable: Option<bool>,
}

impl BackendStatus {
    pub fn unconfigured() -> Self {
        Self { backend_configured: false, backend_source: None, backend_reachable: None }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendStatus>,
}

impl AppState {
    pub fn new(backend: BackendStatus) -> Self {
        Self { backend: Arc::new(backend) }
    }
}
