//! Browser `localStorage` persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `portal`'s session provider persists through the `SessionStorage` trait.
//! This module is the browser implementation: a JSON blob under one key,
//! read on page load by `restore` and cleared on sign-out. Outside the
//! hydrated bundle every operation is a no-op.

use portal::{Session, SessionStorage};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

pub const SESSION_KEY: &str = "acadvizen.session";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Written over a key that could not be removed; reads back as missing.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const CLEARED: &str = "";

pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("could not remove {key}; overwriting it");
                if storage.set_item(key, CLEARED).is_err() {
                    log::warn!("could not clear {key}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Corrupt or outdated blobs read as "no session" instead of failing restore.
fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<Session> {
        load_json(SESSION_KEY)
    }

    fn save(&self, session: &Session) {
        save_json(SESSION_KEY, session);
    }

    fn clear(&self) {
        remove_key(SESSION_KEY);
    }
}
