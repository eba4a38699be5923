//! Bearer-token persistence.
//!
//! The store is the only place that knows where the token lives. Every
//! flow reads it through [`SessionStore`] right before it needs it.

use gloo_storage::{LocalStorage, Storage};

pub trait SessionStore {
    fn get(&self) -> Option<String>;
    /// Replaces any prior token.
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_active(&self) -> bool {
        self.get().is_some()
    }
}

/// Token kept in the browser's LocalStorage under a fixed key.
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    /// Binds the store to `key` and reports whether a session survived
    /// from a previous visit.
    pub fn init(key: impl Into<String>) -> Self {
        let store = Self { key: key.into() };
        if store.is_active() {
            log::info!("Found stored session under '{}'", store.key);
        } else {
            log::info!("No stored session");
        }
        store
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key)
            .ok()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Err(e) = LocalStorage::set(&self.key, token) {
            log::error!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
