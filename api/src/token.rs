//! Bearer-token persistence.
//!
//! The token is the one piece of state shared by every request. It lives in
//! durable client storage behind the [`TokenStore`] trait: the browser
//! build persists to `localStorage`, tests and native builds use
//! [`MemoryTokenStore`].

use std::sync::{Arc, Mutex};

/// Storage key the browser build uses for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Durable storage for the session bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory TokenStore for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a token, for restore-path tests.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// `localStorage`-backed TokenStore used in the browser.
///
/// All operations silently swallow storage errors: an unavailable or
/// blocked `localStorage` degrades to "no session" rather than crashing.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct WebTokenStore;

#[cfg(target_arch = "wasm32")]
impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for WebTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.set("tok");
        assert_eq!(other.get(), Some("tok".to_string()));
    }
}
