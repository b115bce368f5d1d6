//! Domain core for the Acadvizen console.
//!
//! This crate owns everything the browser UI, the SSR host and the operator
//! CLI agree on: how the hosted backend is configured and reached, who is
//! signed in and with which role, which routes a role may see, and how entity
//! records are described, validated and kept in list state.
//!
//! It is deliberately UI-free and runtime-free. Network access goes through the
//! [`remote::Transport`] seam so the same code runs under `wasm32` (via
//! `gloo-net` in `client`) and natively (via `reqwest` behind the `native`
//! feature).

pub mod auth;
pub mod config;
pub mod crud;
pub mod error;
pub mod form;
pub mod guard;
pub mod record;
pub mod remote;
pub mod schema;
pub mod session;

pub use auth::{AuthState, MemoryStorage, SessionProvider, SessionStorage};
pub use config::{BackendConfig, ConfigError, ConfigSource};
pub use error::{AuthError, RemoteError};
pub use guard::{GuardDecision, GuardRequirement};
pub use record::{Record, RecordId};
pub use remote::{RemoteClient, Transport};
pub use schema::{EntityKind, EntitySchema, FieldKind, FieldSpec};
pub use session::{AuthUser, Profile, Role, Session};
