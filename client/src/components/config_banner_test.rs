use super::*;

#[test]
fn message_names_both_conventions() {
    let text = config_message(&ConfigError::MissingKey);
    for var in ["SUPABASE_URL", "VITE_SUPABASE_URL", "SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"] {
        assert!(text.contains(var), "missing {var}");
    }
    assert!(text.contains("disabled"));
}
