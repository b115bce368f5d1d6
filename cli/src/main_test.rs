use super::*;

fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn flags_override_environment() {
    let env = env_from(&[("SUPABASE_URL", "https://env.supabase.co"), ("SUPABASE_ANON_KEY", "env-key")]);
    let config = resolve_config(Some("https://flag.supabase.co"), Some("flag-key"), env).unwrap();
    assert_eq!(config.url, "https://flag.supabase.co");
    assert_eq!(config.anon_key, "flag-key");
    assert_eq!(config.source, portal::ConfigSource::Supabase);
}

#[test]
fn vite_names_are_the_fallback() {
    let env = env_from(&[("VITE_SUPABASE_URL", "https://vite.supabase.co"), ("VITE_SUPABASE_ANON_KEY", "vite-key")]);
    let config = resolve_config(None, None, env).unwrap();
    assert_eq!(config.url, "https://vite.supabase.co");
    assert_eq!(config.source, portal::ConfigSource::Vite);
}

#[test]
fn missing_configuration_is_reported() {
    let err = resolve_config(None, None, env_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::MissingUrl);
}

#[test]
fn entity_names_are_case_insensitive() {
    assert_eq!(parse_entity("Courses").unwrap(), EntityKind::Courses);
    let err = parse_entity("grades").unwrap_err();
    assert!(err.to_string().contains("students, courses"));
}

#[test]
fn create_payload_is_fully_validated() {
    let schema = EntityKind::Courses.schema();
    let err = parse_payload(schema, "{}", false).unwrap_err();
    assert!(matches!(err, CliError::Invalid { .. }));
    assert!(err.to_string().contains("Title is required"));
}

#[test]
fn create_payload_rejects_unknown_fields() {
    let schema = EntityKind::Courses.schema();
    let err = parse_payload(schema, r#"{"title":"Rust","colour":"red"}"#, false).unwrap_err();
    assert!(err.to_string().contains("`colour`"));
}

#[test]
fn update_payload_only_checks_present_fields() {
    let schema = EntityKind::Courses.schema();
    let row = parse_payload(schema, r#"{"title":"  Rust  "}"#, true).unwrap();
    assert_eq!(row.len(), 1);
    assert_eq!(row["title"], json!("Rust"));
}

#[test]
fn payload_must_be_an_object() {
    let schema = EntityKind::Jobs.schema();
    assert!(matches!(parse_payload(schema, "[1,2]", false), Err(CliError::NotAnObject)));
    assert!(matches!(parse_payload(schema, "{", false), Err(CliError::InvalidJson(_))));
}

#[test]
fn records_subcommands_parse() {
    let cli = Cli::try_parse_from(["acadvizen", "records", "modules", "update", "7", "--data", "{}"]).unwrap();
    match cli.command {
        Command::Records(RecordsCommand { entity, command: RecordsSubcommand::Update { id, data } }) => {
            assert_eq!(entity, "modules");
            assert_eq!(id, "7");
            assert_eq!(data, "{}");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn check_report_names_each_probe() {
    let config = BackendConfig::new("https://x.supabase.co", "k", portal::ConfigSource::Supabase).unwrap();
    let report = check_report(&config, &Ok(()), &Err(RemoteError::Transport("refused".into())));
    assert_eq!(report["auth"], json!("ok"));
    assert!(report["rest"].as_str().unwrap().starts_with("error:"));
    assert_eq!(report["source"], json!("SUPABASE_*"));
}
