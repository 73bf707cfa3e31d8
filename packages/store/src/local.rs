//! # `localStorage` session store: browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It
//! writes the token and email into `window.localStorage`, so a page reload
//! keeps the user logged in until the token's own `exp` claim runs out.
//!
//! `LocalStore` is a zero-size handle that looks the storage object up on
//! every call; there is nothing to cache and nothing to close.
//!
//! ## Error handling
//!
//! Storage can be missing (no window, privacy mode) or reject writes (quota).
//! Reads degrade to `None` and writes to a logged no-op, mirroring how the
//! rest of the client treats "no session".

use crate::session_store::SessionStore;
use web_sys::Storage;

/// `window.localStorage`-backed SessionStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to persist {key}: {:?}", e);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key}: {:?}", e);
        }
    }
}
