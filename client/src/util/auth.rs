//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and login pages apply identical redirect behavior, and the
//! root component mirrors the session provider into a signal. Both live here
//! so pages never talk to the provider's channel directly.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::guard::{GuardDecision, GuardRequirement, decide};
use portal::{AuthState, Transport};

use crate::app::AppSession;
use crate::state::notice::Notice;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Path a guarded route should leave for, if any. `None` while loading.
pub fn redirect_target(state: &AuthState, requirement: &GuardRequirement) -> Option<String> {
    match decide(state, requirement) {
        GuardDecision::Redirect(path) => Some(path),
        GuardDecision::Pending | GuardDecision::Render => None,
    }
}

/// Guard redirects replace the history entry so Back does not loop.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// One evaluation of the guard effect. Returns whether it navigated.
pub fn follow_guard_decision<F>(state: &AuthState, requirement: &GuardRequirement, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    match redirect_target(state, requirement) {
        Some(path) => {
            navigate(&path, replace_options());
            true
        }
        None => false,
    }
}

/// Navigate away whenever the guard decision becomes a redirect.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, requirement: GuardRequirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        follow_guard_decision(&auth.get(), &requirement, &navigate);
    });
}

/// Navigate to `destination(state)` once it yields a path.
pub fn install_signed_in_redirect<F, D>(auth: RwSignal<AuthState>, destination: D, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    D: Fn(&AuthState) -> Option<&'static str> + 'static,
{
    Effect::new(move || {
        if let Some(path) = destination(&auth.get()) {
            navigate(path, replace_options());
        }
    });
}

/// Feed provider state changes into `auth` and restore any stored session.
pub fn bridge_auth_state<T>(session: &portal::SessionProvider<T>, auth: RwSignal<AuthState>)
where
    T: Transport + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;

        let mut updates = session.subscribe();
        leptos::task::spawn_local(async move {
            while let Some(state) = updates.next().await {
                auth.set(state);
            }
        });
        let restoring = session.clone();
        leptos::task::spawn_local(async move {
            let state = restoring.restore(now_secs()).await;
            log::debug!("session restored: loading={}", state.is_loading());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, auth);
    }
}

/// Wall-clock Unix seconds from the browser.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Sign out and surface a failed server-side revoke as a page notice.
///
/// Local state is already cleared when the future resolves, so guards
/// redirect regardless of the outcome.
pub fn sign_out_with_notice(session: AppSession, notice: RwSignal<Option<Notice>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = session.sign_out().await {
            log::warn!("sign-out revoke failed: {e}");
            notice.set(Some(Notice::sign_out_failed(&e)));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, notice);
    }
}
