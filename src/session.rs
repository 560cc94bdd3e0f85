//! Session Storage
//!
//! Bearer token and small per-browser flags kept in `localStorage`.

use std::sync::{Arc, Mutex};

const TOKEN_KEY: &str = "token";
const RSVP_REMINDER_KEY: &str = "rsvp_reminder_dismissed";

/// Where the admin bearer token lives
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed token store
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }

    fn store(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("could not persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Token kept in memory only (private browsing with storage disabled)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Browser storage when available, memory otherwise
pub fn default_token_store() -> Arc<dyn TokenStore> {
    if local_storage().is_some() {
        Arc::new(BrowserTokenStore)
    } else {
        tracing::warn!("localStorage unavailable, session will not survive a reload");
        Arc::new(MemoryTokenStore::default())
    }
}

pub fn rsvp_reminder_dismissed() -> bool {
    local_storage()
        .and_then(|s| s.get_item(RSVP_REMINDER_KEY).ok().flatten())
        .is_some_and(|v| v == "true")
}

pub fn dismiss_rsvp_reminder() {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(RSVP_REMINDER_KEY, "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.token(), None);
        store.store("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.token(), None);
    }
}
