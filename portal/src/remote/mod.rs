//! Remote Client Binding for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data and auth operation in the console is a pass-through request to
//! the backend-as-a-service: GoTrue-style auth under `/auth/v1` and a
//! PostgREST-style table API under `/rest/v1`. [`RemoteClient`] builds those
//! requests; a [`Transport`] sends them.
//!
//! DESIGN
//! ======
//! The transport is the only platform seam. The browser build plugs in
//! `gloo-net`, native callers plug in `reqwest` (`native` feature), tests plug
//! in a scripted fake. The `?Send` bound lets browser futures qualify.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`RemoteError::Status`] with the backend's own
//! message when it sent one. A missing configuration short-circuits every call
//! with [`RemoteError::NotConfigured`] before any request is built.

pub mod query;
#[cfg(feature = "native")]
pub mod reqwest_transport;

#[cfg(test)]
pub(crate) mod fake;

use serde_json::{Map, Value};

use crate::config::{BackendConfig, ConfigError};
use crate::error::{AuthError, RemoteError};
use crate::record::{Record, RecordId};
use crate::session::{AuthUser, Session};

pub use query::Query;
#[cfg(feature = "native")]
pub use reqwest_transport::ReqwestTransport;

const MAX_ERROR_BODY: usize = 200;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully built request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Raw response returned by a [`Transport`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Sends one request and returns the raw response.
///
/// Implementations report connection-level failures as
/// [`RemoteError::Transport`]; HTTP error statuses are returned as responses.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError>;
}

// =============================================================================
// CLIENT
// =============================================================================

/// Configured handle to the backend, constructed once at startup.
#[derive(Clone, Debug)]
pub struct RemoteClient<T> {
    config: Result<BackendConfig, ConfigError>,
    transport: T,
}

impl<T: Transport> RemoteClient<T> {
    /// Keep the configuration outcome; an error blocks every later call.
    pub fn new(config: Result<BackendConfig, ConfigError>, transport: T) -> Self {
        if let Err(e) = &config {
            tracing::error!(error = %e, "backend configuration missing; remote calls disabled");
        }
        Self { config, transport }
    }

    /// # Errors
    ///
    /// Returns the configuration error recorded at construction.
    pub fn config(&self) -> Result<&BackendConfig, ConfigError> {
        self.config.as_ref().map_err(Clone::clone)
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_ok()
    }

    fn request(
        &self,
        method: Method,
        url: String,
        access_token: Option<&str>,
        body: Option<String>,
    ) -> Result<HttpRequest, RemoteError> {
        let config = self.config()?;
        let bearer = access_token.unwrap_or(&config.anon_key);
        let mut headers = vec![
            ("apikey".to_owned(), config.anon_key.clone()),
            ("Authorization".to_owned(), format!("Bearer {bearer}")),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        Ok(HttpRequest { method, url, headers, body })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        let method = request.method;
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        let message = decode_error_message(&response.body);
        tracing::warn!(method = method.as_str(), status = response.status, %message, "backend request failed");
        Err(RemoteError::Status { status: response.status, message })
    }

    // -------------------------------------------------------------------------
    // auth
    // -------------------------------------------------------------------------

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the backend rejects the pair,
    /// [`AuthError::Remote`] for every other failure.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let config = self.config().map_err(RemoteError::from)?;
        let body = serde_json::json!({ "email": email, "password": password }).to_string();
        let request = self.request(Method::Post, config.auth_url("token?grant_type=password"), None, Some(body))?;
        let response = match self.send(request).await {
            Ok(response) => response,
            Err(RemoteError::Status { status: 400 | 401 | 422, .. }) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };
        let session: Session = decode_json(&response.body)?;
        tracing::info!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when the revoke call fails.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), RemoteError> {
        let url = self.config()?.auth_url("logout");
        let request = self.request(Method::Post, url, Some(access_token), None)?;
        self.send(request).await?;
        Ok(())
    }

    /// Resolve the user behind an access token; fails once the token is revoked or expired.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when the token is rejected or the call fails.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, RemoteError> {
        let url = self.config()?.auth_url("user");
        let request = self.request(Method::Get, url, Some(access_token), None)?;
        let response = self.send(request).await?;
        decode_json(&response.body)
    }

    /// Probe the auth API.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when the service is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), RemoteError> {
        let url = self.config()?.auth_url("health");
        let request = self.request(Method::Get, url, None, None)?;
        self.send(request).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // tables
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`RemoteError`] when the call fails or rows do not decode.
    pub async fn select(&self, table: &str, query: &Query, access_token: Option<&str>) -> Result<Vec<Record>, RemoteError> {
        let url = query.url(&self.config()?.rest_url(table))?;
        let request = self.request(Method::Get, url, access_token, None)?;
        let response = self.send(request).await?;
        let rows: Vec<Record> = decode_json(&response.body)?;
        tracing::debug!(table, rows = rows.len(), "select");
        Ok(rows)
    }

    /// Exact row count for `query`, read from the `Content-Range` header.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when the call fails or the header is missing.
    pub async fn count(&self, table: &str, query: &Query, access_token: Option<&str>) -> Result<u64, RemoteError> {
        let query = query.clone().columns("id").limit(1);
        let url = query.url(&self.config()?.rest_url(table))?;
        let mut request = self.request(Method::Get, url, access_token, None)?;
        request.headers.push(("Prefer".to_owned(), "count=exact".to_owned()));
        let response = self.send(request).await?;
        response
            .header("content-range")
            .and_then(parse_content_range_total)
            .ok_or_else(|| RemoteError::Decode("missing Content-Range total".to_owned()))
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] when the insert is rejected.
    pub async fn insert(
        &self,
        table: &str,
        row: &Map<String, Value>,
        access_token: Option<&str>,
    ) -> Result<Record, RemoteError> {
        let url = Query::new().url(&self.config()?.rest_url(table))?;
        let request = self.write_request(Method::Post, url, access_token, Some(Value::Object(row.clone())))?;
        let record = first_row(self.send(request).await?)?;
        tracing::info!(table, id = ?record.id(), "inserted");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] when the update is rejected; a match on zero
    /// rows is reported as status 404.
    pub async fn update(
        &self,
        table: &str,
        id: &RecordId,
        patch: &Map<String, Value>,
        access_token: Option<&str>,
    ) -> Result<Record, RemoteError> {
        let url = Query::new().eq("id", &id.0).url(&self.config()?.rest_url(table))?;
        let request = self.write_request(Method::Patch, url, access_token, Some(Value::Object(patch.clone())))?;
        let record = first_row(self.send(request).await?)?;
        tracing::info!(table, %id, "updated");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] when the delete is rejected; a match on zero
    /// rows is reported as status 404.
    pub async fn delete(&self, table: &str, id: &RecordId, access_token: Option<&str>) -> Result<(), RemoteError> {
        let url = Query::new().eq("id", &id.0).url(&self.config()?.rest_url(table))?;
        let request = self.write_request(Method::Delete, url, access_token, None)?;
        first_row(self.send(request).await?)?;
        tracing::info!(table, %id, "deleted");
        Ok(())
    }

    fn write_request(
        &self,
        method: Method,
        url: String,
        access_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<HttpRequest, RemoteError> {
        let mut request = self.request(method, url, access_token, body.map(|b| b.to_string()))?;
        request.headers.push(("Prefer".to_owned(), "return=representation".to_owned()));
        Ok(request)
    }
}

// =============================================================================
// DECODING
// =============================================================================

fn decode_json<D: serde::de::DeserializeOwned>(body: &str) -> Result<D, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}

fn first_row(response: HttpResponse) -> Result<Record, RemoteError> {
    let rows: Vec<Record> = decode_json(&response.body)?;
    rows.into_iter().next().ok_or(RemoteError::Status {
        status: 404,
        message: "no matching row".to_owned(),
    })
}

/// Pull a human-readable message out of an auth or REST error body.
pub(crate) fn decode_error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }
    body.trim().chars().take(MAX_ERROR_BODY).collect()
}

/// `0-24/312` → 312, `*/0` → 0.
pub(crate) fn parse_content_range_total(raw: &str) -> Option<u64> {
    raw.rsplit_once('/')?.1.trim().parse().ok()
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;
