//! `gloo-net` implementation of the remote transport.
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR): every call fails with a transport error, since session
//! and data calls only run from browser effects and handlers.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use portal::RemoteError;
use portal::remote::{HttpRequest, HttpResponse, Transport};

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_message() -> String {
    "browser transport is not available during server rendering".to_owned()
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};
            use portal::remote::Method as PortalMethod;

            let method = match request.method {
                PortalMethod::Get => Method::GET,
                PortalMethod::Post => Method::POST,
                PortalMethod::Patch => Method::PATCH,
                PortalMethod::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
            let response = prepared.send().await.map_err(|e| RemoteError::Transport(e.to_string()))?;
            let status = response.status();
            let headers = response.headers().entries().collect();
            let body = response.text().await.map_err(|e| RemoteError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, headers, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(RemoteError::Transport(unavailable_message()))
        }
    }
}
