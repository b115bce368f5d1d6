use super::*;

fn session(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "access".to_owned(),
        refresh_token: Some("refresh".to_owned()),
        expires_at,
        user: AuthUser { id: "u1".to_owned(), email: Some("a@example.com".to_owned()) },
    }
}

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse(" Student "), Role::Student);
    assert_eq!(Role::parse("instructor"), Role::Instructor);
}

#[test]
fn role_parse_keeps_unknown_values() {
    assert_eq!(Role::parse("superadmin"), Role::Unrecognized("superadmin".to_owned()));
    assert_eq!(Role::parse(""), Role::Unrecognized(String::new()));
}

#[test]
fn landing_paths_follow_role() {
    assert_eq!(Role::Admin.landing_path(), "/admin");
    assert_eq!(Role::Student.landing_path(), "/student");
    assert_eq!(Role::Instructor.landing_path(), "/instructor");
    assert_eq!(Role::Unrecognized("guest".to_owned()).landing_path(), "/");
}

#[test]
fn profile_deserializes_role_string() {
    let profile: Profile =
        serde_json::from_value(serde_json::json!({ "id": "u1", "role": "admin", "full_name": "Ada" })).unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.display_name(), "Ada");
}

#[test]
fn profile_without_role_field_is_unrecognized() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u1", "email": "x@y.z" })).unwrap();
    assert_eq!(profile.role, Role::default());
    assert_eq!(profile.display_name(), "x@y.z");
}

#[test]
fn role_serializes_back_to_string() {
    let value = serde_json::to_value(Role::Instructor).unwrap();
    assert_eq!(value, serde_json::json!("instructor"));
}

#[test]
fn session_expiry_uses_expires_at() {
    assert!(!session(None).is_expired(1_000));
    assert!(!session(Some(2_000)).is_expired(1_000));
    assert!(session(Some(1_000)).is_expired(1_000));
}

#[test]
fn session_debug_hides_tokens() {
    let rendered = format!("{:?}", session(None));
    assert!(!rendered.contains("access"));
    assert!(!rendered.contains("refresh"));
}

#[test]
fn session_parses_token_endpoint_body() {
    let body = serde_json::json!({
        "access_token": "jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_000_000,
        "refresh_token": "r",
        "user": { "id": "abc", "email": "admin@acadvizen.com", "aud": "authenticated" }
    });
    let parsed: Session = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.user.id, "abc");
    assert_eq!(parsed.expires_at, Some(1_700_000_000));
}
