//! # Durable key/value storage for the client session
//!
//! [`SessionStore`] is the only process-wide mutable state the client keeps:
//! the access token and the authenticated user's email, under the keys in
//! [`crate::keys`]. The login flow is the single writer; every other flow
//! only reads.
//!
//! Implementations:
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind a mutex |
//! | `LocalStore` | wasm32 + `web` | `window.localStorage` |
//!
//! Reads never fail: an unavailable backend is indistinguishable from an
//! absent key, which every caller already treats as "not logged in".

use std::future::Future;

/// Async string store for session values.
pub trait SessionStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = ()>;
    fn remove(&self, key: &str) -> impl Future<Output = ()>;
}
