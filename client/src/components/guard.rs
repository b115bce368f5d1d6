//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap a page's content and render it only when `portal::guard::decide`
//! says so. While the session is still resolving, a placeholder is shown and
//! nothing navigates; once a redirect is decided it is performed with
//! `replace` so the guarded URL does not stay in history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::guard::{GuardDecision, GuardRequirement, decide};
use portal::{AuthState, Role};

use crate::util::auth::install_guard_redirect;

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub fn placeholder_text(decision: &GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Pending => "Checking your session...",
        GuardDecision::Redirect(_) => "Redirecting...",
        GuardDecision::Render => "",
    }
}

fn guarded(requirement: GuardRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, requirement.clone(), use_navigate());
    let decision = Memo::new(move |_| decide(&auth.get(), &requirement));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>{move || placeholder_text(&decision.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Any signed-in user.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::authenticated(), children)
}

/// Signed-in users holding one of `roles`; others go to their own landing page.
#[component]
pub fn RoleRoute(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::any_of(roles), children)
}

/// Admin console pages; visitors without a session are sent to the admin login.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardRequirement::admin_console(), children)
}
