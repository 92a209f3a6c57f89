//! # Browser storage — `window.localStorage`
//!
//! [`BrowserStore`] is the [`LocalStore`] implementation used on the **web platform**.
//! It reads and writes the origin's `localStorage` through `web-sys`, so cached
//! values survive page reloads and browser restarts.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Storage can be disabled (private browsing, quota, sandboxed
//! iframes); in that case the app behaves as if nothing was ever cached and falls
//! back to asking the backend for a session.

use web_sys::Storage;

use crate::cache::LocalStore;

/// `localStorage`-backed LocalStore for the web platform.
///
/// Zero-size and `Clone`: the `Storage` handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl LocalStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
