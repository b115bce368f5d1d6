//! Account page for any signed-in user, including those without a role.

use leptos::prelude::*;
use portal::{AuthState, Role};

use crate::components::guard::ProtectedRoute;
use crate::pages::panels::DashboardHeader;

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// What the account page tells a user about their access.
pub fn access_summary(role: &Role) -> String {
    match role {
        Role::Unrecognized(_) => {
            "Your account does not have a role yet. Contact an administrator to get access.".to_owned()
        }
        Role::Admin | Role::Student | Role::Instructor => format!("You are signed in as {role}."),
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AccountSummary/>
        </ProtectedRoute>
    }
}

#[component]
fn AccountSummary() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let Some(profile) = auth.with_untracked(|a| a.profile().cloned()) else {
        return view! { <p>"Checking your session..."</p> }.into_any();
    };
    let summary = access_summary(&profile.role);
    let landing = match profile.role {
        Role::Unrecognized(_) => None,
        ref role => Some(role.landing_path()),
    };

    view! {
        <div class="role-dashboard">
            <DashboardHeader title="My account" profile=profile/>
            <p class="account__summary">{summary}</p>
            {landing.map(|href| view! { <a class="btn btn--primary" href=href>"Go to my dashboard"</a> })}
        </div>
    }
    .into_any()
}
