//! # Session cache — the persisted `userDetails` slot
//!
//! This module is the storage half of the session layer. [`SessionCache`] owns a
//! single key in a [`LocalStore`] and keeps the last successfully fetched
//! [`UserDetails`] there so a page reload can restore the dashboard session
//! without touching the network.
//!
//! ## [`LocalStore`] trait
//!
//! A synchronous key/value interface with three methods, shaped like the browser's
//! `Storage` API: `get_item`, `set_item`, `remove_item`. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::browser`]).
//!
//! ## Payload format
//!
//! Writes always produce a versioned envelope:
//!
//! ```json
//! {"version": 1, "user": {"id": 1, "email": "a@b.com", "business": "Cafe", "image": "logo.png"}}
//! ```
//!
//! Reads accept that envelope and the legacy bare object (`{"id": 1, ...}`) that
//! older builds wrote directly. The value is always replaced as a whole; there is
//! no partial update.
//!
//! | Stored value | [`SessionCache::load`] |
//! |--------------|------------------------|
//! | nothing | `Ok(None)` |
//! | envelope, version 1 | `Ok(Some(user))` |
//! | bare `UserDetails` object | `Ok(Some(user))` |
//! | envelope, other version | `Err(CacheError::UnsupportedVersion)` |
//! | anything else | `Err(CacheError::Malformed)` |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserDetails;

/// Default storage key of the cached profile row.
pub const USER_DETAILS_KEY: &str = "userDetails";

/// Current version of the cached payload.
pub const CACHE_VERSION: u32 = 1;

/// Synchronous key/value storage that survives page reloads.
pub trait LocalStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Errors produced while decoding the cached value.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cached user details are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("cached user details use unsupported version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    user: UserDetails,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPayload {
    Versioned { version: u32, user: serde_json::Value },
    Legacy(UserDetails),
}

/// The `userDetails` slot of a [`LocalStore`].
#[derive(Clone, Debug)]
pub struct SessionCache<S: LocalStore> {
    store: S,
    key: String,
}

impl<S: LocalStore> SessionCache<S> {
    /// Cache stored under the default `userDetails` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, USER_DETAILS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Decode the cached user, if any.
    pub fn load(&self) -> Result<Option<UserDetails>, CacheError> {
        match self.store.get_item(&self.key) {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Replace the cached value with `user`.
    pub fn save(&self, user: &UserDetails) -> Result<(), CacheError> {
        let raw = encode(user)?;
        self.store.set_item(&self.key, &raw);
        Ok(())
    }

    pub fn clear(&self) {
        self.store.remove_item(&self.key);
    }
}

/// Serialize a user into the current envelope format.
pub fn encode(user: &UserDetails) -> Result<String, CacheError> {
    let envelope = Envelope {
        version: CACHE_VERSION,
        user: user.clone(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored value in either the envelope or the legacy bare format.
pub fn decode(raw: &str) -> Result<UserDetails, CacheError> {
    match serde_json::from_str::<StoredPayload>(raw) {
        Ok(StoredPayload::Versioned { version, user }) if version == CACHE_VERSION => {
            Ok(serde_json::from_value(user)?)
        }
        Ok(StoredPayload::Versioned { version, .. }) => Err(CacheError::UnsupportedVersion(version)),
        Ok(StoredPayload::Legacy(user)) => Ok(user),
        // Re-parse as the legacy shape so the error names the offending field.
        Err(_) => Ok(serde_json::from_str::<UserDetails>(raw)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn cafe() -> UserDetails {
        UserDetails {
            id: 1,
            email: "a@b.com".to_string(),
            business: Some("Cafe".to_string()),
            image: Some("logo.png".to_string()),
        }
    }

    #[test]
    fn test_empty_slot_loads_none() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store.clone());
        assert!(store.get_item(USER_DETAILS_KEY).is_none());
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_save_writes_versioned_envelope() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store.clone());
        cache.save(&cafe()).unwrap();

        let raw = store.get_item(USER_DETAILS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["user"]["email"], "a@b.com");

        assert_eq!(cache.load().unwrap(), Some(cafe()));
    }

    #[test]
    fn test_legacy_bare_object_is_accepted() {
        let store = MemoryStore::new();
        store.set_item(
            USER_DETAILS_KEY,
            r#"{"id":1,"email":"a@b.com","business":"Cafe","image":"logo.png"}"#,
        );
        let cache = SessionCache::new(store);
        assert_eq!(cache.load().unwrap(), Some(cafe()));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let store = MemoryStore::new();
        store.set_item(
            USER_DETAILS_KEY,
            r#"{"version":9,"user":{"id":1,"email":"a@b.com","extra":[1,2]}}"#,
        );
        let cache = SessionCache::new(store);
        assert!(matches!(
            cache.load(),
            Err(CacheError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let store = MemoryStore::new();
        store.set_item(USER_DETAILS_KEY, "{not json");
        let cache = SessionCache::new(store.clone());
        assert!(matches!(cache.load(), Err(CacheError::Malformed(_))));

        store.set_item(USER_DETAILS_KEY, r#"{"email":"a@b.com"}"#);
        assert!(matches!(cache.load(), Err(CacheError::Malformed(_))));
    }

    #[test]
    fn test_save_replaces_whole_value() {
        let cache = SessionCache::new(MemoryStore::new());
        cache.save(&cafe()).unwrap();

        let updated = UserDetails {
            business: None,
            image: None,
            ..cafe()
        };
        cache.save(&updated).unwrap();
        assert_eq!(cache.load().unwrap(), Some(updated));
    }

    #[test]
    fn test_clear_removes_slot() {
        let store = MemoryStore::new();
        let cache = SessionCache::with_key(store.clone(), "custom");
        cache.save(&cafe()).unwrap();
        assert!(store.get_item("custom").is_some());
        assert!(store.get_item(USER_DETAILS_KEY).is_none());

        cache.clear();
        assert!(store.get_item("custom").is_none());
    }
}
