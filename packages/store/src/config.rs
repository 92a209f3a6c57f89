//! # Storefront configuration — `storefront.toml`
//!
//! Defines the settings the session layer needs to reach the hosted backend:
//! where it lives, which key to present, and the names of the table, bucket and
//! storage slot it uses.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://abcd1234.supabase.co"
//! anon_key = "eyJhbGciOi..."
//!
//! [tables]
//! admin = "food-web-admin"
//!
//! [storage]
//! logo_bucket = "food-logo"
//!
//! [cache]
//! key = "userDetails"
//! ```
//!
//! All sections derive `Default` with the production names, so a missing or
//! empty file only leaves the backend URL and key unset.

use serde::{Deserialize, Serialize};

use crate::cache::USER_DETAILS_KEY;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Connection settings for the hosted backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://abcd1234.supabase.co`. Empty when unset.
    #[serde(default)]
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TablesConfig {
    /// Table holding one profile row per dashboard user.
    #[serde(default = "default_admin_table")]
    pub admin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Public bucket holding business logos.
    #[serde(default = "default_logo_bucket")]
    pub logo_bucket: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Local storage key of the cached profile row.
    #[serde(default = "default_cache_key")]
    pub key: String,
}

fn default_admin_table() -> String {
    "food-web-admin".to_string()
}

fn default_logo_bucket() -> String {
    "food-logo".to_string()
}

fn default_cache_key() -> String {
    USER_DETAILS_KEY.to_string()
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            admin: default_admin_table(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            logo_bucket: default_logo_bucket(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key: default_cache_key(),
        }
    }
}

impl StorefrontConfig {
    /// Create a config pointing at the given backend.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig {
                url: url.into(),
                anon_key: anon_key.into(),
            },
            ..Self::default()
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "storefront.toml"
    }

    /// Whether both the backend URL and key are set.
    pub fn is_configured(&self) -> bool {
        !self.backend.url.is_empty() && !self.backend.anon_key.is_empty()
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
