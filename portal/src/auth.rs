//! Auth Context: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionProvider`] is constructed once and injected where it is needed
//! (Leptos context in the browser, a local in the CLI). It owns the remote
//! client, the current [`AuthState`], a [`SessionStorage`] for persistence
//! across reloads, and a list of subscribers notified over unbounded
//! channels on every state change.
//!
//! INVARIANTS
//! ==========
//! - State has three phases. `Loading` is never reported as unauthenticated.
//! - Sign-out clears local state and storage before the remote revoke is
//!   issued; a failed revoke is returned to the caller, never dropped.
//! - Roles come from the `profiles` row only.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use crate::error::{AuthError, RemoteError};
use crate::remote::{Query, RemoteClient, Transport};
use crate::session::{Profile, Role, Session};

pub const PROFILES_TABLE: &str = "profiles";

// =============================================================================
// STATE
// =============================================================================

/// Resolution phase of the current browser or CLI session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Session status not yet resolved.
    #[default]
    Loading,
    Authenticated { session: Session, profile: Profile },
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated { session, .. } => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.profile().map(|p| &p.role)
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Where a session survives between page loads or CLI invocations.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// In-process storage; nothing outlives the process.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Session>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { slot: Mutex::new(Some(session)) }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<Session> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

// =============================================================================
// PROVIDER
// =============================================================================

struct Shared {
    state: AuthState,
    /// Bumped on every state change; lets a slow restore detect that it lost a race.
    generation: u64,
    subscribers: Vec<UnboundedSender<AuthState>>,
}

impl Shared {
    fn publish(&mut self, next: AuthState) -> AuthState {
        let previous = std::mem::replace(&mut self.state, next);
        self.generation += 1;
        let snapshot = self.state.clone();
        self.subscribers.retain(|tx| tx.unbounded_send(snapshot.clone()).is_ok());
        previous
    }
}

/// Injected session provider. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionProvider<T> {
    client: RemoteClient<T>,
    storage: Arc<dyn SessionStorage>,
    shared: Arc<Mutex<Shared>>,
}

impl<T: Transport> SessionProvider<T> {
    pub fn new(client: RemoteClient<T>, storage: Arc<dyn SessionStorage>) -> Self {
        let shared = Shared { state: AuthState::Loading, generation: 0, subscribers: Vec::new() };
        Self { client, storage, shared: Arc::new(Mutex::new(shared)) }
    }

    pub fn client(&self) -> &RemoteClient<T> {
        &self.client
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current phase.
    pub fn state(&self) -> AuthState {
        self.lock().state.clone()
    }

    /// Active session, if any. Returns `None` both while loading and when
    /// signed out; use [`SessionProvider::state`] to tell those apart.
    pub fn current_session(&self) -> Option<Session> {
        self.lock().state.session().cloned()
    }

    pub fn access_token(&self) -> Option<String> {
        self.current_session().map(|s| s.access_token)
    }

    /// Receive the current state immediately, then every change.
    pub fn subscribe(&self) -> UnboundedReceiver<AuthState> {
        let (tx, rx) = unbounded();
        let mut shared = self.lock();
        let _ = tx.unbounded_send(shared.state.clone());
        shared.subscribers.push(tx);
        rx
    }

    /// Replace the state and notify subscribers. Returns the state it replaced.
    fn set_state(&self, next: AuthState) -> AuthState {
        self.lock().publish(next)
    }

    /// Read the profile row for the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the lookup fails. A missing row is not an
    /// error: the user gets a profile without a recognized role.
    pub async fn fetch_profile(&self, session: &Session) -> Result<Profile, RemoteError> {
        let query = Query::new().eq("id", &session.user.id).limit(1);
        let rows = self
            .client
            .select(PROFILES_TABLE, &query, Some(&session.access_token))
            .await?;
        let Some(row) = rows.into_iter().next() else {
            tracing::warn!(user_id = %session.user.id, "no profile row; user has no role");
            return Ok(Profile::without_role(&session.user));
        };
        let mut profile: Profile =
            serde_json::from_value(serde_json::Value::Object(row.0)).map_err(|e| RemoteError::Decode(e.to_string()))?;
        if profile.email.is_none() {
            profile.email.clone_from(&session.user.email);
        }
        Ok(profile)
    }

    /// Resolve the initial phase from storage. Always leaves `Loading`.
    ///
    /// A sign-in or sign-out that completes while the stored session is being
    /// revalidated wins: the restore result is then discarded and storage is
    /// left alone.
    pub async fn restore(&self, now_secs: i64) -> AuthState {
        let started = self.lock().generation;
        let (next, clear_stored) = match self.storage.load() {
            None => (AuthState::Unauthenticated, false),
            Some(session) if session.is_expired(now_secs) => {
                tracing::info!(user_id = %session.user.id, "stored session expired");
                (AuthState::Unauthenticated, true)
            }
            Some(session) => self.revalidate(session).await,
        };

        let mut shared = self.lock();
        if shared.generation != started {
            tracing::debug!("auth state changed during restore; keeping the newer state");
            return shared.state.clone();
        }
        match &next {
            AuthState::Authenticated { session, .. } => self.storage.save(session),
            _ if clear_stored => self.storage.clear(),
            _ => {}
        }
        shared.publish(next.clone());
        next
    }

    /// Returns the resolved state and whether the stored copy must be dropped.
    async fn revalidate(&self, session: Session) -> (AuthState, bool) {
        match self.check_session(session).await {
            Ok((session, profile)) => {
                tracing::info!(user_id = %session.user.id, role = %profile.role, "session restored");
                (AuthState::Authenticated { session, profile }, false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored session rejected");
                // Offline is not a verdict on the token; keep it for the next load.
                (AuthState::Unauthenticated, e.status().is_some())
            }
        }
    }

    async fn check_session(&self, mut session: Session) -> Result<(Session, Profile), RemoteError> {
        session.user = self.client.get_user(&session.access_token).await?;
        let profile = self.fetch_profile(&session).await?;
        Ok((session, profile))
    }

    /// Password sign-in for any role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when credentials are rejected or the profile
    /// cannot be read; no session is established in either case.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, AuthError> {
        let session = self.client.sign_in_with_password(email, password).await?;
        let profile = match self.fetch_profile(&session).await {
            Ok(profile) => profile,
            Err(e) => {
                self.revoke_quietly(&session).await;
                return Err(e.into());
            }
        };
        let replaced = self.establish(session, profile.clone());
        self.revoke_replaced(replaced).await;
        Ok(profile)
    }

    /// Password sign-in that only succeeds for admin profiles.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoAdminAccess`] after revoking the fresh session
    /// when the profile is not an admin; otherwise as [`SessionProvider::sign_in`].
    pub async fn sign_in_admin(&self, email: &str, password: &str) -> Result<Profile, AuthError> {
        let session = self.client.sign_in_with_password(email, password).await?;
        let profile = match self.fetch_profile(&session).await {
            Ok(profile) => profile,
            Err(e) => {
                self.revoke_quietly(&session).await;
                return Err(e.into());
            }
        };
        if profile.role != Role::Admin {
            tracing::warn!(user_id = %session.user.id, role = %profile.role, "admin sign-in refused");
            self.revoke_quietly(&session).await;
            self.storage.clear();
            let replaced = self.set_state(AuthState::Unauthenticated).session().cloned();
            self.revoke_replaced(replaced).await;
            return Err(AuthError::NoAdminAccess);
        }
        let replaced = self.establish(session, profile.clone());
        self.revoke_replaced(replaced).await;
        Ok(profile)
    }

    /// Store and publish a fresh session. Returns the session it displaced, if
    /// that was a different token.
    fn establish(&self, session: Session, profile: Profile) -> Option<Session> {
        tracing::info!(user_id = %session.user.id, role = %profile.role, "session established");
        self.storage.save(&session);
        let token = session.access_token.clone();
        self.set_state(AuthState::Authenticated { session, profile })
            .session()
            .filter(|previous| previous.access_token != token)
            .cloned()
    }

    async fn revoke_replaced(&self, replaced: Option<Session>) {
        if let Some(previous) = replaced {
            tracing::info!(user_id = %previous.user.id, "revoking replaced session");
            self.revoke_quietly(&previous).await;
        }
    }

    async fn revoke_quietly(&self, session: &Session) {
        if let Err(e) = self.client.sign_out(&session.access_token).await {
            tracing::warn!(error = %e, user_id = %session.user.id, "session revoke failed");
        }
    }

    /// Clear local state, then revoke the session remotely.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Remote`] when the revoke call fails. Local state
    /// is already cleared by then.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let session = self.current_session();
        self.storage.clear();
        self.set_state(AuthState::Unauthenticated);

        let Some(session) = session else {
            return Ok(());
        };
        match self.client.sign_out(&session.access_token).await {
            Ok(()) => Ok(()),
            // Already revoked or expired server-side.
            Err(RemoteError::Status { status: 401 | 403, .. }) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, user_id = %session.user.id, "sign-out revoke failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
