//! Startup connectivity check against the backend's auth health endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is logged and folded into [`BackendStatus`]; nothing here
//! stops the server from starting.

use portal::{RemoteClient, Transport};

use crate::state::BackendStatus;

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

pub async fn probe<T: Transport>(client: &RemoteClient<T>, enabled: bool) -> BackendStatus {
    let config = match client.config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "backend not configured; sign-in and data screens are disabled");
            return BackendStatus::unconfigured();
        }
    };
    let source = config.source;
    tracing::info!(source = source.as_str(), url = %config.url, "backend configured");

    let reachable = if enabled {
        match client.health().await {
            Ok(()) => {
                tracing::info!("backend reachable");
                Some(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "backend connectivity check failed");
                Some(false)
            }
        }
    } else {
        tracing::info!("startup connectivity check disabled");
        None
    };

    BackendStatus { backend_configured: true, backend_source: Some(source), backend_reachable: reachable }
}
