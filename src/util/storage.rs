//! Persisted credential store over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager writes the token and user record here right after a
//! successful login, clears both on logout, and reads them once at startup.
//! Values are trusted as-is; a missing or unreadable half means "no session".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::error::ClientError;
use crate::net::types::User;
use crate::state::auth::Session;

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Storage errors (quota, privacy mode) are swallowed.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Process-local store used for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryStore::new())
    }
}

/// Durable mirror of the in-memory [`Session`] under two fixed keys.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Rc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read a complete session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RehydrationSkip`] when either half is missing,
    /// empty, or the user record does not parse.
    pub fn load(&self) -> Result<Session, ClientError> {
        let token = self
            .backend
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::RehydrationSkip("token missing".to_owned()))?;
        let raw_user = self
            .backend
            .get(USER_KEY)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::RehydrationSkip("user record missing".to_owned()))?;
        let user = serde_json::from_str::<User>(&raw_user)
            .map_err(|e| ClientError::RehydrationSkip(format!("user record unreadable: {e}")))?;
        Ok(Session { token, user })
    }

    /// Overwrite both entries.
    pub fn save(&self, session: &Session) {
        let Ok(raw_user) = serde_json::to_string(&session.user) else {
            return;
        };
        self.backend.set(TOKEN_KEY, &session.token);
        self.backend.set(USER_KEY, &raw_user);
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
