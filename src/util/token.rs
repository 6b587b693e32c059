//! Durable bearer-token slot backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One key holds the raw bearer token string; an absent key means
//! unauthenticated on next load. The session store is the only writer, and
//! the HTTP client reads the slot to attach the `Authorization` header.
//! Requires a browser environment; outside one the slot reads empty.

use crate::store::TokenStore;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ecobin_access_token";

/// Read the persisted bearer token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// `localStorage`-backed [`TokenStore`] handed to the session store at the
/// root composition point.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<String> {
        load()
    }

    fn save(&self, token: &str) {
        save(token);
    }

    fn clear(&self) {
        clear();
    }
}
