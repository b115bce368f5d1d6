use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_prefers_supabase_names() {
    let cfg = BackendConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "https://primary.supabase.co"),
        ("VITE_SUPABASE_URL", "https://legacy.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon-primary"),
        ("VITE_SUPABASE_ANON_KEY", "anon-legacy"),
    ]))
    .unwrap();
    assert_eq!(cfg.url, "https://primary.supabase.co");
    assert_eq!(cfg.anon_key, "anon-primary");
    assert_eq!(cfg.source, ConfigSource::Supabase);
}

#[test]
fn from_lookup_falls_back_to_vite_names() {
    let cfg = BackendConfig::from_lookup(lookup(&[
        ("VITE_SUPABASE_URL", "https://legacy.supabase.co/"),
        ("VITE_SUPABASE_ANON_KEY", "anon-legacy"),
    ]))
    .unwrap();
    assert_eq!(cfg.url, "https://legacy.supabase.co");
    assert_eq!(cfg.source, ConfigSource::Vite);
}

#[test]
fn from_lookup_mixes_conventions_per_value() {
    let cfg = BackendConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "https://primary.supabase.co"),
        ("VITE_SUPABASE_ANON_KEY", "anon-legacy"),
    ]))
    .unwrap();
    assert_eq!(cfg.anon_key, "anon-legacy");
    assert_eq!(cfg.source, ConfigSource::Supabase);
}

#[test]
fn blank_values_count_as_missing() {
    let err = BackendConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "   "),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::MissingUrl);
}

#[test]
fn missing_key_is_reported() {
    let err = BackendConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingKey);
    assert!(err.to_string().contains("VITE_SUPABASE_ANON_KEY"));
}

#[test]
fn non_http_url_is_rejected() {
    let err = BackendConfig::new("ftp://x.supabase.co", "anon", ConfigSource::Supabase).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl(_)));
    let err = BackendConfig::new("not a url", "anon", ConfigSource::Supabase).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl(_)));
}

#[test]
fn endpoint_helpers_join_paths() {
    let cfg = BackendConfig::new("https://x.supabase.co/", "anon", ConfigSource::Supabase).unwrap();
    assert_eq!(cfg.auth_url("/token"), "https://x.supabase.co/auth/v1/token");
    assert_eq!(cfg.rest_url("courses"), "https://x.supabase.co/rest/v1/courses");
}

#[test]
fn debug_output_redacts_key() {
    let cfg = BackendConfig::new("https://x.supabase.co", "secret-anon", ConfigSource::Supabase).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-anon"));
    assert!(rendered.contains("<redacted>"));
}
