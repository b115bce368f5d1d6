//! Server settings parsed from environment variables.
//!
//! Backend credentials are not read here; `portal::BackendConfig` owns those.

use std::path::PathBuf;

use crate::error::ServerError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub check_on_startup: bool,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_CHECK_ON_STARTUP`: probe the backend before serving, default true
    /// - `SITE_PUBLIC_DIR`: static files served after every other route, default `public`
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ServerError::InvalidPort(raw.clone()))?,
        };
        let check_on_startup = parse_bool(lookup("BACKEND_CHECK_ON_STARTUP").as_deref()).unwrap_or(true);
        let public_dir = lookup("SITE_PUBLIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        Ok(Self { port, check_on_startup, public_dir })
    }
}

pub(crate) fn parse_bool(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}
