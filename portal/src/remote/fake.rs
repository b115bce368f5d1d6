//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::RemoteError;

/// Replays queued responses in order and records every request it saw.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, RemoteError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(HttpResponse { status, headers: Vec::new(), body: body.to_string() }))
    }

    pub fn respond_with_headers(&self, status: u16, headers: &[(&str, &str)], body: serde_json::Value) -> &Self {
        let headers = headers.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        self.push(Ok(HttpResponse { status, headers, body: body.to_string() }))
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(Err(RemoteError::Transport(message.to_owned())))
    }

    fn push(&self, response: Result<HttpResponse, RemoteError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted response".to_owned())))
    }
}
