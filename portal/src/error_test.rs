use super::*;

#[test]
fn no_admin_access_message_is_exact() {
    assert_eq!(AuthError::NoAdminAccess.to_string(), "You don't have admin access");
}

#[test]
fn remote_auth_error_displays_user_message() {
    let err = AuthError::Remote(RemoteError::Transport("dns".to_owned()));
    assert_eq!(err.to_string(), "Could not reach the server. Check your connection and try again.");
}

#[test]
fn status_message_prefers_backend_text() {
    let err = RemoteError::Status { status: 409, message: "duplicate key value".to_owned() };
    assert_eq!(err.user_message(), "duplicate key value");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn status_without_text_falls_back_to_code() {
    let err = RemoteError::Status { status: 500, message: String::new() };
    assert_eq!(err.user_message(), "Request failed (500).");
}

#[test]
fn permission_statuses_share_one_message() {
    for status in [401, 403] {
        let err = RemoteError::Status { status, message: "jwt expired".to_owned() };
        assert_eq!(err.user_message(), "You are not allowed to perform this action.");
    }
}

#[test]
fn config_error_converts_into_not_configured() {
    let err: RemoteError = ConfigError::MissingKey.into();
    assert!(matches!(err, RemoteError::NotConfigured(ConfigError::MissingKey)));
    assert_eq!(err.status(), None);
}
