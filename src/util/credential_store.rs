//! Durable key-value persistence of the serialized session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser localStorage slot that lets a session survive reloads. Only
//! the auth flows in `util::auth` write here, so there is a single writer by
//! construction. A record that fails to parse is treated the same as no
//! record at all.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use crate::net::types::StoredSession;

/// Fixed localStorage key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "flotilla_session";

/// A durable slot for the persisted session record.
///
/// Injectable so tests can substitute an in-memory fake for the browser
/// storage engine.
pub trait CredentialStore {
    /// Read and parse the persisted record; `None` when absent or corrupt.
    fn load(&self) -> Option<StoredSession>;
    /// Serialize and persist `record`, replacing any previous value.
    fn save(&self, record: &StoredSession);
    /// Remove the persisted record.
    fn clear(&self);
}

/// Credential store backed by browser `localStorage`.
///
/// Outside the browser (SSR) every operation is a no-op and `load` returns
/// `None`, so server rendering stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<StoredSession> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
            match serde_json::from_str(&raw) {
                Ok(record) => Some(record),
                Err(err) => {
                    // Corrupt record: drop it so the next load starts clean.
                    log::warn!("discarding unreadable session record: {err}");
                    let _ = storage.remove_item(SESSION_STORAGE_KEY);
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, record: &StoredSession) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let Ok(raw) = serde_json::to_string(record) else {
                return;
            };
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
}

/// In-memory credential store for tests.
///
/// Stores the serialized JSON form so tests exercise the same parse path as
/// the browser store, including corrupt-payload handling.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    /// Seed the slot with a raw payload, bypassing serialization.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: std::cell::RefCell::new(Some(raw.to_owned())),
        }
    }

    /// Whether the slot currently holds a value.
    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

#[cfg(test)]
impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<StoredSession> {
        let raw = self.slot.borrow().clone()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(_) => {
                self.slot.borrow_mut().take();
                None
            }
        }
    }

    fn save(&self, record: &StoredSession) {
        if let Ok(raw) = serde_json::to_string(record) {
            *self.slot.borrow_mut() = Some(raw);
        }
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
