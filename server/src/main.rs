//! SSR host for the Acadvizen console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `.env`, reports how the hosted backend is configured, optionally
//! probes it once, and then serves the Leptos app plus a small diagnostics
//! API. The backend itself is only ever called from the browser; this process
//! never proxies data.

mod config;
mod error;
mod probe;
mod routes;
mod state;

use portal::remote::ReqwestTransport;
use portal::{BackendConfig, RemoteClient};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let settings = ServerConfig::from_env()?;
    let transport = ReqwestTransport::with_default_timeout().map_err(|e| ServerError::Http(e.to_string()))?;
    let client = RemoteClient::new(BackendConfig::from_env(), transport);

    // Never fatal: the site still serves and shows the configuration banner.
    let backend = probe::probe(&client, settings.check_on_startup).await;
    let state = AppState::new(backend);

    let app = routes::app(state, &settings)?;
    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = settings.port, public_dir = %settings.public_dir.display(), "acadvizen listening");
    axum::serve(listener, app).await?;
    Ok(())
}
