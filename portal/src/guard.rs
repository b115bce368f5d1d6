//! Route guard decisions.
//!
//! The UI guard components are thin shells over [`decide`]: they render a
//! loading indicator for [`GuardDecision::Pending`], their children for
//! [`GuardDecision::Render`], and navigate for [`GuardDecision::Redirect`].
//! Keeping the decision pure lets every state/role combination be tested
//! without a browser.

use crate::auth::AuthState;
use crate::session::Role;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";

/// What a guarded route needs before it renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRequirement {
    /// Empty means any authenticated user.
    pub roles: Vec<Role>,
    /// Where unauthenticated visitors are sent.
    pub login_path: String,
}

impl GuardRequirement {
    /// Unconditional guard: any session will do.
    #[must_use]
    pub fn authenticated() -> Self {
        Self { roles: Vec::new(), login_path: LOGIN_PATH.to_owned() }
    }

    /// Role-scoped guard accepting any of `roles`.
    #[must_use]
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self { roles: roles.into_iter().collect(), login_path: LOGIN_PATH.to_owned() }
    }

    #[must_use]
    pub fn role(role: Role) -> Self {
        Self::any_of([role])
    }

    /// Admin console guard; unauthenticated visitors go to the admin login.
    #[must_use]
    pub fn admin_console() -> Self {
        Self::role(Role::Admin).with_login_path(ADMIN_LOGIN_PATH)
    }

    #[must_use]
    pub fn with_login_path(mut self, path: &str) -> Self {
        self.login_path = path.to_owned();
        self
    }

    fn admits(&self, role: &Role) -> bool {
        self.roles.is_empty() || self.roles.contains(role)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session status unknown; show a loading indicator, never navigate.
    Pending,
    Render,
    Redirect(String),
}

/// Decide what a guarded route does for `state`.
///
/// A role mismatch redirects to the landing page of the role the user
/// actually has, not to a fixed fallback.
#[must_use]
pub fn decide(state: &AuthState, requirement: &GuardRequirement) -> GuardDecision {
    match state {
        AuthState::Loading => GuardDecision::Pending,
        AuthState::Unauthenticated => GuardDecision::Redirect(requirement.login_path.clone()),
        AuthState::Authenticated { profile, .. } => {
            if requirement.admits(&profile.role) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(profile.role.landing_path().to_owned())
            }
        }
    }
}

/// Where a login page sends a visitor who is already signed in.
#[must_use]
pub fn signed_in_destination(state: &AuthState) -> Option<&'static str> {
    state.role().map(Role::landing_path)
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
