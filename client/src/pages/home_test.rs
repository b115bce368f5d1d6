use super::*;
use portal::{AuthUser, Profile, Role, Session};

#[test]
fn visitors_get_a_sign_in_link() {
    assert_eq!(account_link(&AuthState::Unauthenticated), ("Sign in", "/login"));
    assert_eq!(account_link(&AuthState::Loading), ("Sign in", "/login"));
}

#[test]
fn signed_in_users_get_their_landing_page() {
    let user = AuthUser { id: "u1".to_owned(), email: None };
    let state = AuthState::Authenticated {
        session: Session { access_token: "jwt".to_owned(), refresh_token: None, expires_at: None, user: user.clone() },
        profile: Profile { role: Role::Student, ..Profile::without_role(&user) },
    };
    assert_eq!(account_link(&state), ("My dashboard", "/student"));
}

#[test]
fn users_without_a_role_get_their_account_page() {
    let user = AuthUser { id: "u2".to_owned(), email: None };
    let state = AuthState::Authenticated {
        session: Session { access_token: "jwt".to_owned(), refresh_token: None, expires_at: None, user: user.clone() },
        profile: Profile::without_role(&user),
    };
    assert_eq!(account_link(&state), ("My account", "/account"));
}

#[test]
fn catalogue_has_content() {
    assert!(!PROGRAMMES.is_empty());
    assert!(PROGRAMMES.iter().all(|p| !p.title.is_empty() && !p.duration.is_empty()));
}
