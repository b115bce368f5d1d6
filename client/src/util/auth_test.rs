use std::cell::RefCell;

use super::*;
use portal::{AuthUser, Profile, Role, Session};

fn signed_in(role: Role) -> AuthState {
    let user = AuthUser { id: "u1".to_owned(), email: Some("a@b.com".to_owned()) };
    AuthState::Authenticated {
        session: Session { access_token: "jwt".to_owned(), refresh_token: None, expires_at: None, user: user.clone() },
        profile: Profile { role, ..Profile::without_role(&user) },
    }
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(redirect_target(&AuthState::Loading, &GuardRequirement::authenticated()), None);
    assert_eq!(redirect_target(&AuthState::Loading, &GuardRequirement::admin_console()), None);
}

#[test]
fn unauthenticated_goes_to_requirement_login_path() {
    assert_eq!(
        redirect_target(&AuthState::Unauthenticated, &GuardRequirement::authenticated()),
        Some("/login".to_owned())
    );
    assert_eq!(
        redirect_target(&AuthState::Unauthenticated, &GuardRequirement::admin_console()),
        Some("/admin/login".to_owned())
    );
}

#[test]
fn wrong_role_goes_to_own_landing_page() {
    let requirement = GuardRequirement::role(Role::Admin);
    assert_eq!(redirect_target(&signed_in(Role::Student), &requirement), Some("/student".to_owned()));
    assert_eq!(redirect_target(&signed_in(Role::Admin), &requirement), None);
}

#[test]
fn redirects_replace_history() {
    assert!(replace_options().replace);
}

fn recording_navigate() -> (impl Fn(&str, NavigateOptions), std::rc::Rc<RefCell<Vec<(String, bool)>>>) {
    let calls = std::rc::Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (move |path: &str, options: NavigateOptions| sink.borrow_mut().push((path.to_owned(), options.replace)), calls)
}

#[test]
fn loading_never_navigates() {
    let (navigate, calls) = recording_navigate();
    for requirement in [
        GuardRequirement::authenticated(),
        GuardRequirement::role(Role::Student),
        GuardRequirement::admin_console(),
    ] {
        assert!(!follow_guard_decision(&AuthState::Loading, &requirement, &navigate));
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn settled_state_navigates_once_with_replace() {
    let (navigate, calls) = recording_navigate();
    let requirement = GuardRequirement::admin_console();

    assert!(!follow_guard_decision(&AuthState::Loading, &requirement, &navigate));
    assert!(follow_guard_decision(&AuthState::Unauthenticated, &requirement, &navigate));
    assert!(!follow_guard_decision(&signed_in(Role::Admin), &requirement, &navigate));

    assert_eq!(calls.borrow().as_slice(), &[("/admin/login".to_owned(), true)]);
}
