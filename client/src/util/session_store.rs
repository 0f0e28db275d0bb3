//! Session-record persistence behind an injectable store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The OTP flow writes the verified user here; the app shell and profile page
//! read it back. Components receive the store through a [`SessionHandle`]
//! context instead of touching `localStorage` directly, so tests and SSR can
//! substitute [`MemorySessionStore`].
//!
//! TRADE-OFFS
//! ==========
//! Reads are forgiving: a missing key, a storage failure, or a stored value
//! that no longer matches the schema all read as "no session". Writes report
//! failures so the caller can log them.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex};

use crate::net::types::SessionRecord;

/// Storage key holding the JSON-serialized session record.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write session record: {0}")]
    Write(String),
}

/// Capability to read, write and forget the current session record.
pub trait SessionStore: Send + Sync {
    /// The stored record, or `None` when absent or unreadable.
    fn get(&self) -> Option<SessionRecord>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the record cannot be serialized or written.
    fn set(&self, record: &SessionRecord) -> Result<(), SessionError>;

    /// Remove the stored record. Missing records are not an error.
    fn clear(&self);

    /// True when a readable record is stored.
    fn has_session(&self) -> bool {
        self.get().is_some()
    }
}

/// Shared store handle provided through Leptos context.
#[derive(Clone)]
pub struct SessionHandle(pub Arc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Arc::new(store))
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Browser `localStorage` backend. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<SessionRecord> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
            decode_record(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionError::Unavailable)?;
            storage
                .set_item(SESSION_KEY, &raw)
                .map_err(|e| SessionError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Err(SessionError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-memory backend holding the serialized record, as `localStorage` would.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw stored value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }

    /// The raw stored string, exactly as it would sit under [`SESSION_KEY`].
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionRecord> {
        self.raw().as_deref().and_then(decode_record)
    }

    fn set(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        let mut guard = self.raw.lock().map_err(|e| SessionError::Write(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.raw.lock() {
            *guard = None;
        }
    }
}

fn decode_record(raw: &str) -> Option<SessionRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("ignoring unreadable session record: {e}");
            None
        }
    }
}

