//! Backend configuration for the browser bundle.
//!
//! The values are baked in when the WASM bundle is compiled, so a deployment
//! sets `SUPABASE_URL`/`SUPABASE_ANON_KEY` (or the `VITE_` names) in the build
//! environment. A bundle built without them still renders, shows the
//! configuration banner, and refuses every remote call.

use portal::{BackendConfig, ConfigError};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Look up a configuration variable captured at compile time.
pub fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        "SUPABASE_URL" => option_env!("SUPABASE_URL"),
        "SUPABASE_ANON_KEY" => option_env!("SUPABASE_ANON_KEY"),
        "VITE_SUPABASE_URL" => option_env!("VITE_SUPABASE_URL"),
        "VITE_SUPABASE_ANON_KEY" => option_env!("VITE_SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}

pub fn backend_config() -> Result<BackendConfig, ConfigError> {
    BackendConfig::from_lookup(compiled_var)
}
