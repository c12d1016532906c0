use super::types::{User, UserRole};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "userRole";

/// Flat string key/value storage backing the persisted session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
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

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn persist_session(store: &dyn SessionStore, user: &User) -> Result<(), String> {
    let record = serde_json::to_string(user).map_err(|err| err.to_string())?;
    store.set(USER_KEY, &record)?;
    store.set(ROLE_KEY, user.role.as_str())
}

/// Reads the persisted identity. A record that no longer parses is dropped.
pub fn restore_session(store: &dyn SessionStore) -> Option<User> {
    let raw = match store.get(USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("failed to read persisted session: {}", err);
            return None;
        }
    };
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => {
            sync_role_key(store, user.role);
            Some(user)
        }
        Err(err) => {
            log::warn!("discarding unreadable session record: {}", err);
            if let Err(err) = clear_session(store) {
                log::warn!("failed to clear session record: {}", err);
            }
            None
        }
    }
}

/// The identity record is authoritative; a stale or missing role key is rewritten.
fn sync_role_key(store: &dyn SessionStore, role: UserRole) {
    let stored = store.get(ROLE_KEY).ok().flatten();
    if stored.as_deref().and_then(UserRole::parse) == Some(role) {
        return;
    }
    if let Err(err) = store.set(ROLE_KEY, role.as_str()) {
        log::warn!("failed to rewrite role key: {}", err);
    }
}

pub fn clear_session(store: &dyn SessionStore) -> Result<(), String> {
    let user = store.remove(USER_KEY);
    let role = store.remove(ROLE_KEY);
    user.and(role)
}
