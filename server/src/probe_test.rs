use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal::remote::{HttpRequest, HttpResponse};
use portal::{BackendConfig, ConfigError, ConfigSource, RemoteError};

use super::*;

/// Answers every request the same way and remembers the URLs it saw.
#[derive(Clone)]
struct StubTransport {
    status: Option<u16>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    fn new(status: Option<u16>) -> Self {
        Self { status, seen: Arc::new(Mutex::new(Vec::new())) }
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        self.seen.lock().unwrap().push(request.url);
        match self.status {
            Some(status) => Ok(HttpResponse { status, headers: Vec::new(), body: "{}".to_owned() }),
            None => Err(RemoteError::Transport("connection refused".to_owned())),
        }
    }
}

fn configured() -> Result<BackendConfig, ConfigError> {
    BackendConfig::new("https://demo.supabase.co", "anon", ConfigSource::Vite)
}

#[tokio::test]
async fn unconfigured_backend_is_reported_without_a_request() {
    let stub = StubTransport::new(Some(200));
    let client = RemoteClient::new(Err(ConfigError::MissingUrl), stub.clone());
    let status = probe(&client, true).await;
    assert_eq!(status, BackendStatus::unconfigured());
    assert!(stub.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn disabled_check_skips_the_request() {
    let stub = StubTransport::new(Some(200));
    let client = RemoteClient::new(configured(), stub.clone());
    let status = probe(&client, false).await;
    assert!(status.backend_configured);
    assert_eq!(status.backend_source, Some(ConfigSource::Vite));
    assert_eq!(status.backend_reachable, None);
    assert!(stub.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn healthy_backend_is_reachable() {
    let stub = StubTransport::new(Some(200));
    let client = RemoteClient::new(configured(), stub.clone());
    let status = probe(&client, true).await;
    assert_eq!(status.backend_reachable, Some(true));
    assert_eq!(stub.seen.lock().unwrap().as_slice(), ["https://demo.supabase.co/auth/v1/health"]);
}

#[tokio::test]
async fn failures_mark_backend_unreachable() {
    for stub in [StubTransport::new(Some(503)), StubTransport::new(None)] {
        let client = RemoteClient::new(configured(), stub.clone());
        assert_eq!(probe(&client, true).await.backend_reachable, Some(false));
    }
}
