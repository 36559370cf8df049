//! Durable credential storage for the access/refresh token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in exactly two `localStorage` slots so a page reload resumes
//! the session. The trait seam lets the gateway and session store run against
//! an in-memory implementation off the browser.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::types::TokenPair;

/// `localStorage` key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// `localStorage` key for the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Two-slot credential store.
///
/// `store_pair` always writes both slots and `clear` always removes both, so
/// the slots never hold tokens from different grants.
pub trait TokenStore {
    fn access(&self) -> Option<String>;
    fn refresh(&self) -> Option<String>;
    fn store_pair(&self, pair: &TokenPair);
    fn clear(&self);
}

/// Browser-backed store over `window.localStorage`.
///
/// Client-side (hydrate): real localStorage reads and writes.
/// Server-side (SSR): reads return `None` and writes are no-ops, so rendering
/// always sees a logged-out session.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_slot(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_slot(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_slot(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

impl TokenStore for LocalStorageTokens {
    fn access(&self) -> Option<String> {
        read_slot(ACCESS_TOKEN_KEY)
    }

    fn refresh(&self) -> Option<String> {
        read_slot(REFRESH_TOKEN_KEY)
    }

    fn store_pair(&self, pair: &TokenPair) {
        write_slot(ACCESS_TOKEN_KEY, &pair.access_token);
        write_slot(REFRESH_TOKEN_KEY, &pair.refresh_token);
    }

    fn clear(&self) {
        remove_slot(ACCESS_TOKEN_KEY);
        remove_slot(REFRESH_TOKEN_KEY);
    }
}

#[derive(Debug, Default)]
struct Slots {
    access: Option<String>,
    refresh: Option<String>,
}

/// In-memory store for tests and non-browser rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    slots: Rc<RefCell<Slots>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with both slots filled.
    pub fn with_pair(access: &str, refresh: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().access = Some(access.to_owned());
        store.slots.borrow_mut().refresh = Some(refresh.to_owned());
        store
    }

    /// Store pre-seeded with only the access slot filled.
    pub fn with_access_only(access: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().access = Some(access.to_owned());
        store
    }
}

impl TokenStore for MemoryTokens {
    fn access(&self) -> Option<String> {
        self.slots.borrow().access.clone()
    }

    fn refresh(&self) -> Option<String> {
        self.slots.borrow().refresh.clone()
    }

    fn store_pair(&self, pair: &TokenPair) {
        let mut slots = self.slots.borrow_mut();
        slots.access = Some(pair.access_token.clone());
        slots.refresh = Some(pair.refresh_token.clone());
    }

    fn clear(&self) {
        let mut slots = self.slots.borrow_mut();
        slots.access = None;
        slots.refresh = None;
    }
}
