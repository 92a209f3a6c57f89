//! Backend configuration from `storefront.toml` and environment variables.
//!
//! Native builds start from `storefront.toml` in the working directory when it
//! exists, then apply `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the other variables
//! from the process environment (after loading `.env` with `dotenvy`). Browser
//! builds have no file system or process environment, so they start from the
//! defaults and the same variables are captured at compile time.

use store::StorefrontConfig;
use tracing::warn;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const ADMIN_TABLE_VAR: &str = "STOREFRONT_ADMIN_TABLE";
pub const LOGO_BUCKET_VAR: &str = "STOREFRONT_LOGO_BUCKET";

/// Build the storefront config from the config file and the environment.
pub fn load_config() -> StorefrontConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let file = {
        dotenvy::dotenv().ok();
        std::fs::read_to_string(StorefrontConfig::filename()).ok()
    };
    #[cfg(target_arch = "wasm32")]
    let file: Option<String> = None;

    config_from(file.as_deref(), env_value)
}

/// Parse `file` (defaults when absent or invalid) and layer `lookup` on top.
pub fn config_from(
    file: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> StorefrontConfig {
    let base = match file.map(StorefrontConfig::from_toml) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("Ignoring invalid {}: {}", StorefrontConfig::filename(), e);
            StorefrontConfig::default()
        }
        None => StorefrontConfig::default(),
    };
    with_overrides(base, lookup)
}

/// Apply every variable `lookup` knows about on top of `config`.
pub fn with_overrides(
    mut config: StorefrontConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> StorefrontConfig {
    if let Some(url) = lookup(URL_VAR) {
        config.backend.url = url;
    }
    if let Some(key) = lookup(ANON_KEY_VAR) {
        config.backend.anon_key = key;
    }
    if let Some(table) = lookup(ADMIN_TABLE_VAR) {
        config.tables.admin = table;
    }
    if let Some(bucket) = lookup(LOGO_BUCKET_VAR) {
        config.storage.logo_bucket = bucket;
    }
    config
}

fn env_value(name: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    let build_time = match name {
        URL_VAR => option_env!("SUPABASE_URL"),
        ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
        ADMIN_TABLE_VAR => option_env!("STOREFRONT_ADMIN_TABLE"),
        LOGO_BUCKET_VAR => option_env!("STOREFRONT_LOGO_BUCKET"),
        _ => None,
    };
    build_time.filter(|v| !v.is_empty()).map(str::to_string)
}
