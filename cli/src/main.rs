//! `acadvizen`: operator tool for the Acadvizen backend.
//!
//! Resolves backend configuration the same way the web app does, checks
//! connectivity, signs in, and reads or writes entity tables with the same
//! schema validation the admin forms apply.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use portal::auth::PROFILES_TABLE;
use portal::crud::{self, CrudState};
use portal::form;
use portal::remote::{Query, ReqwestTransport};
use portal::{
    AuthError, BackendConfig, ConfigError, EntityKind, EntitySchema, MemoryStorage, Profile, RecordId, RemoteClient,
    RemoteError, Session, SessionProvider,
};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("backend request failed: {0}")]
    Remote(#[from] RemoteError),
    #[error("unknown entity `{name}`; expected one of: {expected}")]
    UnknownEntity { name: String, expected: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("invalid {entity}:\n{details}")]
    Invalid { entity: &'static str, details: String },
    #[error("connectivity check failed")]
    CheckFailed,
}

#[derive(Parser, Debug)]
#[command(name = "acadvizen", about = "Acadvizen backend operator CLI")]
struct Cli {
    /// Backend URL; falls back to SUPABASE_URL, then VITE_SUPABASE_URL.
    #[arg(long)]
    url: Option<String>,

    /// Anon key; falls back to SUPABASE_ANON_KEY, then VITE_SUPABASE_ANON_KEY.
    #[arg(long)]
    anon_key: Option<String>,

    /// Access token from `acadvizen login`, sent with record commands.
    #[arg(long, env = "ACADVIZEN_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report configuration and probe the auth and REST endpoints.
    Check,
    /// Sign in and print the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACADVIZEN_PASSWORD", hide_env_values = true)]
        password: String,
        /// Require the admin role, as the admin console does.
        #[arg(long)]
        admin: bool,
    },
    /// List, create, update or delete rows of one entity table.
    Records(RecordsCommand),
}

#[derive(Args, Debug)]
struct RecordsCommand {
    /// students, courses, modules, assignments, jobs or certificates.
    entity: String,
    #[command(subcommand)]
    command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecordsSubcommand {
    List {
        /// Case-insensitive filter over the entity's searchable fields.
        #[arg(long)]
        search: Option<String>,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

type Client = RemoteClient<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.url.as_deref(), cli.anon_key.as_deref(), |key| std::env::var(key).ok());
    let transport = ReqwestTransport::with_default_timeout()?;
    let client = RemoteClient::new(config, transport);

    match cli.command {
        Command::Check => run_check(&client).await,
        Command::Login { email, password, admin } => run_login(client, &email, &password, admin).await,
        Command::Records(records) => run_records(&client, cli.access_token.as_deref(), records).await,
    }
}

/// Flags win over environment; a flag counts as the `SUPABASE_*` convention.
fn resolve_config<F>(url: Option<&str>, anon_key: Option<&str>, env: F) -> Result<BackendConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    BackendConfig::from_lookup(|key: &str| match key {
        "SUPABASE_URL" => url.map(str::to_owned).or_else(|| env(key)),
        "SUPABASE_ANON_KEY" => anon_key.map(str::to_owned).or_else(|| env(key)),
        _ => env(key),
    })
}

// =============================================================================
// CHECK
// =============================================================================

async fn run_check(client: &Client) -> Result<(), CliError> {
    let config = client.config()?.clone();
    let auth = client.health().await;
    let rest = client
        .select(PROFILES_TABLE, &Query::new().columns("id").limit(1), None)
        .await
        .map(|_| ());
    print_json(&check_report(&config, &auth, &rest))?;
    if auth.is_ok() && rest.is_ok() { Ok(()) } else { Err(CliError::CheckFailed) }
}

fn check_report(config: &BackendConfig, auth: &Result<(), RemoteError>, rest: &Result<(), RemoteError>) -> Value {
    let outcome = |result: &Result<(), RemoteError>| match result {
        Ok(()) => "ok".to_owned(),
        Err(e) => format!("error: {e}"),
    };
    json!({
        "source": config.source.as_str(),
        "url": config.url,
        "auth": outcome(auth),
        "rest": outcome(rest),
    })
}

// =============================================================================
// LOGIN
// =============================================================================

async fn run_login(client: Client, email: &str, password: &str, admin: bool) -> Result<(), CliError> {
    let provider = SessionProvider::new(client, Arc::new(MemoryStorage::default()));
    let profile = if admin {
        provider.sign_in_admin(email, password).await?
    } else {
        provider.sign_in(email, password).await?
    };
    let session = provider.current_session().ok_or(AuthError::MissingSession)?;
    tracing::info!(user_id = %session.user.id, role = profile.role.as_str(), "signed in");
    print_json(&login_summary(&session, &profile))
}

fn login_summary(session: &Session, profile: &Profile) -> Value {
    json!({
        "user_id": session.user.id,
        "email": session.user.email,
        "full_name": profile.full_name,
        "role": profile.role.as_str(),
        "access_token": session.access_token,
        "expires_at": session.expires_at,
    })
}

// =============================================================================
// RECORDS
// =============================================================================

async fn run_records(client: &Client, token: Option<&str>, records: RecordsCommand) -> Result<(), CliError> {
    let schema = parse_entity(&records.entity)?.schema();
    match records.command {
        RecordsSubcommand::List { search } => {
            let items = crud::fetch_all(client, schema, token).await?;
            let state = CrudState { items, filter: search.unwrap_or_default(), ..CrudState::default() };
            print_json(&serde_json::to_value(state.visible(schema))?)
        }
        RecordsSubcommand::Create { data } => {
            let row = parse_payload(schema, &data, false)?;
            let record = crud::create(client, schema, &row, token).await?;
            print_json(&serde_json::to_value(record)?)
        }
        RecordsSubcommand::Update { id, data } => {
            let row = parse_payload(schema, &data, true)?;
            let record = crud::update(client, schema, &RecordId(id), &row, token).await?;
            print_json(&serde_json::to_value(record)?)
        }
        RecordsSubcommand::Delete { id } => {
            crud::remove(client, schema, &RecordId(id.clone()), token).await?;
            print_json(&json!({ "deleted": id, "table": schema.table }))
        }
    }
}

fn parse_entity(name: &str) -> Result<EntityKind, CliError> {
    EntityKind::from_slug(&name.trim().to_ascii_lowercase()).ok_or_else(|| CliError::UnknownEntity {
        name: name.to_owned(),
        expected: EntityKind::ALL.iter().map(|k| k.slug()).collect::<Vec<_>>().join(", "),
    })
}

/// Parse `--data` and run it through the form validator. `partial` payloads
/// (updates) only validate the keys they contain.
fn parse_payload(schema: &EntitySchema, raw: &str, partial: bool) -> Result<Map<String, Value>, CliError> {
    let Value::Object(object) = serde_json::from_str::<Value>(raw)? else {
        return Err(CliError::NotAnObject);
    };
    let values = form::values_from_json(&object);
    let result = if partial {
        form::validate_partial(schema, &values)
    } else {
        let unknown: Vec<String> = object
            .keys()
            .filter(|key| schema.field(key).is_none())
            .map(|key| format!("{} has no field `{key}`", schema.singular))
            .collect();
        if !unknown.is_empty() {
            return Err(CliError::Invalid { entity: schema.singular, details: unknown.join("\n") });
        }
        form::validate(schema, &values)
    };
    result.map_err(|errors| CliError::Invalid {
        entity: schema.singular,
        details: errors.iter().map(|e| format!("  {}: {}", e.field, e.message)).collect::<Vec<_>>().join("\n"),
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
