use futures::executor::block_on;
use serde_json::json;

use super::fake::FakeTransport;
use super::*;
use crate::config::ConfigSource;

fn client(transport: &FakeTransport) -> RemoteClient<FakeTransport> {
    let config = BackendConfig::new("https://x.supabase.co", "anon-key", ConfigSource::Supabase);
    RemoteClient::new(config, transport.clone())
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "jwt-1",
        "refresh_token": "r-1",
        "expires_at": 2_000_000_000,
        "user": { "id": "u1", "email": "ada@example.com" }
    })
}

// =============================================================================
// auth
// =============================================================================

#[test]
fn sign_in_posts_credentials_to_token_endpoint() {
    let transport = FakeTransport::new();
    transport.respond(200, token_body());

    let session = block_on(client(&transport).sign_in_with_password("ada@example.com", "pw")).unwrap();
    assert_eq!(session.access_token, "jwt-1");
    assert_eq!(session.user.id, "u1");

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "https://x.supabase.co/auth/v1/token?grant_type=password");
    assert_eq!(request.header("apikey"), Some("anon-key"));
    assert_eq!(request.header("authorization"), Some("Bearer anon-key"));
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "ada@example.com", "password": "pw" }));
}

#[test]
fn sign_in_rejection_maps_to_invalid_credentials() {
    let transport = FakeTransport::new();
    transport.respond(400, json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" }));

    let err = block_on(client(&transport).sign_in_with_password("ada@example.com", "bad")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn sign_in_server_error_stays_remote() {
    let transport = FakeTransport::new();
    transport.respond(503, json!({ "message": "maintenance" }));

    let err = block_on(client(&transport).sign_in_with_password("a@b.c", "pw")).unwrap_err();
    assert_eq!(err, AuthError::Remote(RemoteError::Status { status: 503, message: "maintenance".to_owned() }));
}

#[test]
fn sign_out_sends_user_token() {
    let transport = FakeTransport::new();
    transport.respond(204, json!(null));

    block_on(client(&transport).sign_out("jwt-1")).unwrap();
    let request = &transport.requests()[0];
    assert_eq!(request.url, "https://x.supabase.co/auth/v1/logout");
    assert_eq!(request.header("Authorization"), Some("Bearer jwt-1"));
}

#[test]
fn unconfigured_client_never_touches_transport() {
    let transport = FakeTransport::new();
    let client = RemoteClient::new(Err(ConfigError::MissingUrl), transport.clone());

    let err = block_on(client.select("courses", &Query::new(), None)).unwrap_err();
    assert_eq!(err, RemoteError::NotConfigured(ConfigError::MissingUrl));
    let err = block_on(client.sign_in_with_password("a@b.c", "pw")).unwrap_err();
    assert_eq!(err, AuthError::Remote(RemoteError::NotConfigured(ConfigError::MissingUrl)));
    assert_eq!(transport.request_count(), 0);
    assert!(!client.is_configured());
}

// =============================================================================
// tables
// =============================================================================

#[test]
fn select_decodes_rows_and_uses_access_token() {
    let transport = FakeTransport::new();
    transport.respond(200, json!([{ "id": 1, "title": "Rust" }, { "id": 2, "title": "Go" }]));

    let rows = block_on(client(&transport).select("courses", &Query::new().order("title", true), Some("jwt-1"))).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id(), Some(RecordId("1".to_owned())));

    let request = &transport.requests()[0];
    assert_eq!(request.url, "https://x.supabase.co/rest/v1/courses?select=*&order=title.asc");
    assert_eq!(request.header("Authorization"), Some("Bearer jwt-1"));
}

#[test]
fn insert_requests_representation_and_returns_row() {
    let transport = FakeTransport::new();
    transport.respond(201, json!([{ "id": "c1", "title": "Rust" }]));

    let mut row = Map::new();
    row.insert("title".to_owned(), json!("Rust"));
    let record = block_on(client(&transport).insert("courses", &row, Some("jwt"))).unwrap();
    assert_eq!(record.text("title"), "Rust");

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("Prefer"), Some("return=representation"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
}

#[test]
fn update_targets_row_by_id() {
    let transport = FakeTransport::new();
    transport.respond(200, json!([{ "id": "c1", "title": "Rust 2" }]));

    let mut patch = Map::new();
    patch.insert("title".to_owned(), json!("Rust 2"));
    block_on(client(&transport).update("courses", &RecordId("c1".to_owned()), &patch, Some("jwt"))).unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.url, "https://x.supabase.co/rest/v1/courses?select=*&id=eq.c1");
}

#[test]
fn update_matching_nothing_is_not_found() {
    let transport = FakeTransport::new();
    transport.respond(200, json!([]));

    let err = block_on(client(&transport).update("courses", &RecordId("gone".to_owned()), &Map::new(), None)).unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn delete_matching_nothing_is_not_found() {
    let transport = FakeTransport::new();
    transport.respond(200, json!([]));

    let err = block_on(client(&transport).delete("jobs", &RecordId("gone".to_owned()), None)).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.requests()[0].method, Method::Delete);
}

#[test]
fn count_reads_content_range_total() {
    let transport = FakeTransport::new();
    transport.respond_with_headers(200, &[("Content-Range", "0-0/57")], json!([{ "id": 1 }]));

    let total = block_on(client(&transport).count("students", &Query::new(), Some("jwt"))).unwrap();
    assert_eq!(total, 57);
    let request = &transport.requests()[0];
    assert_eq!(request.header("prefer"), Some("count=exact"));
    assert_eq!(request.url, "https://x.supabase.co/rest/v1/students?select=id&limit=1");
}

#[test]
fn transport_failure_propagates() {
    let transport = FakeTransport::new();
    transport.fail("connection refused");

    let err = block_on(client(&transport).health()).unwrap_err();
    assert_eq!(err, RemoteError::Transport("connection refused".to_owned()));
}

// =============================================================================
// decoding helpers
// =============================================================================

#[test]
fn error_message_prefers_known_keys() {
    assert_eq!(decode_error_message(r#"{"msg":"Invalid login credentials"}"#), "Invalid login credentials");
    assert_eq!(decode_error_message(r#"{"code":"23505","message":"duplicate key"}"#), "duplicate key");
    assert_eq!(decode_error_message(r#"{"error":"invalid_grant"}"#), "invalid_grant");
}

#[test]
fn error_message_falls_back_to_trimmed_body() {
    assert_eq!(decode_error_message("  Bad Gateway \n"), "Bad Gateway");
    assert_eq!(decode_error_message(&"x".repeat(500)).len(), 200);
}

#[test]
fn content_range_parsing() {
    assert_eq!(parse_content_range_total("0-24/312"), Some(312));
    assert_eq!(parse_content_range_total("*/0"), Some(0));
    assert_eq!(parse_content_range_total("0-24/*"), None);
    assert_eq!(parse_content_range_total("garbage"), None);
}
