use super::*;

#[test]
fn users_without_a_role_are_told_to_ask_for_access() {
    let text = access_summary(&Role::Unrecognized("guest".to_owned()));
    assert!(text.contains("does not have a role"));
}

#[test]
fn recognized_roles_are_named() {
    assert_eq!(access_summary(&Role::Instructor), "You are signed in as instructor.");
}
