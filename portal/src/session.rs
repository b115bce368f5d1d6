//! Session, identity and role types.
//!
//! A [`Session`] is what the backend's auth API issues. A [`Profile`] is the
//! application-level record read from the `profiles` table; its [`Role`] is
//! the only input to authorization decisions.

use serde::{Deserialize, Serialize};

/// Identity attached to a session by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token pair plus identity, as issued by `auth/v1/token`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// A session without an expiry is treated as live until the backend says otherwise.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Application role stored on the profile record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Student,
    Instructor,
    /// Any value the console does not know, including an empty one.
    Unrecognized(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "student" => Self::Student,
            "instructor" => Self::Instructor,
            _ => Self::Unrecognized(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Canonical landing route for this role; unknown roles go to the site root.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Student => "/student",
            Self::Instructor => "/instructor",
            Self::Unrecognized(_) => "/",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the `profiles` table keyed by the auth user id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl Profile {
    /// Stand-in used when the user has no profile row yet.
    #[must_use]
    pub fn without_role(user: &AuthUser) -> Self {
        Self { id: user.id.clone(), email: user.email.clone(), full_name: None, role: Role::default() }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("User")
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
