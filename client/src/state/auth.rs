//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar and route components read login status from this state. It is
//! filled from the session store after hydration and refreshed whenever the
//! login modal reports a successful verification.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionRecord;
use crate::util::session_store::SessionStore;

/// Authentication state tracking the stored user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionRecord>,
    /// True until the store has been read in the browser.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Read the current user from `store`. An unreadable record reads as
    /// logged out and is left in place.
    pub fn load(store: &dyn SessionStore) -> Self {
        Self { user: store.get(), loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
