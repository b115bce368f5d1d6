//! Page-wide notice shown above the current screen.

use portal::AuthError;

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Error,
}

impl NoticeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { tone: NoticeTone::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { tone: NoticeTone::Error, message: message.into() }
    }

    /// Local sign-out already happened; only the server-side revoke failed.
    pub fn sign_out_failed(err: &AuthError) -> Self {
        Self::error(format!("You are signed out on this device, but the server did not confirm it: {err}"))
    }
}
