//! Error types shared by every caller of the backend.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is retried automatically. Each variant carries enough to build
//! the inline message the owning screen shows; [`RemoteError::user_message`]
//! and the `Display` impl of [`AuthError`] are the user-facing strings.

use crate::config::ConfigError;

/// Failure of a single call to the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Configuration is missing or invalid; the call never left the process.
    #[error("backend not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status, when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for an inline error surface.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured(_) => "The backend is not configured. Contact the site administrator.".to_owned(),
            Self::Transport(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Status { status: 401 | 403, .. } => "You are not allowed to perform this action.".to_owned(),
            Self::Status { status: 404, .. } => "The record no longer exists.".to_owned(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed ({status})."),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Failure of a sign-in, sign-out or session restore.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Credentials were valid but the profile does not carry the admin role.
    #[error("You don't have admin access")]
    NoAdminAccess,

    #[error("You are not signed in")]
    MissingSession,

    #[error("{}", .0.user_message())]
    Remote(#[from] RemoteError),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
