//! Backend-as-a-service connection settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two values are required: the project URL and the public (anon) API key.
//! The server and CLI read them from the process environment, the browser
//! bundle reads them from the build environment. Both go through
//! [`BackendConfig::from_lookup`] so precedence and validation stay identical.
//!
//! Two naming conventions exist in deployed environments: `SUPABASE_*` and the
//! older front-end `VITE_SUPABASE_*`. Both are honored, `SUPABASE_*` first.

use url::Url;

pub const URL_VARS: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
pub const KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

/// Errors raised while resolving [`BackendConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("backend URL not set (tried {})", URL_VARS.join(", "))]
    MissingUrl,
    #[error("backend anon key not set (tried {})", KEY_VARS.join(", "))]
    MissingKey,
    #[error("backend URL `{0}` is not a valid http(s) URL")]
    InvalidUrl(String),
}

/// Which naming convention supplied the backend URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    Supabase,
    Vite,
}

impl ConfigSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supabase => "SUPABASE_*",
            Self::Vite => "VITE_SUPABASE_*",
        }
    }
}

/// Resolved connection settings for the hosted backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub source: ConfigSource,
}

// The anon key is public but still kept out of logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl BackendConfig {
    /// Build from explicit values, applying the same validation as the lookups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is blank or the URL is invalid.
    pub fn new(url: &str, anon_key: &str, source: ConfigSource) -> Result<Self, ConfigError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if anon_key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidUrl(url.to_owned()));
        }
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned(), source })
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is missing under every known name
    /// or the URL does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (url, source) = match non_empty(URL_VARS[0]) {
            Some(url) => (url, ConfigSource::Supabase),
            None => (non_empty(URL_VARS[1]).ok_or(ConfigError::MissingUrl)?, ConfigSource::Vite),
        };
        let anon_key = KEY_VARS
            .iter()
            .find_map(|key| non_empty(*key))
            .ok_or(ConfigError::MissingKey)?;

        Self::new(&url, &anon_key, source)
    }

    /// Resolve settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Base URL for the auth API.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// Base URL for a table in the REST API.
    #[must_use]
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table.trim_start_matches('/'))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
