//! Session token state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header swaps its navigation on `is_signed_in`, login stores the token
//! and logout clears it. The token itself lives in `localStorage`; this
//! signal mirrors it so the header re-renders without polling storage.
//!
//! `loaded` stays false during SSR and flips once the browser has read
//! storage, which keeps hydrated markup identical to the server's.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Mirror of the persisted session token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub loaded: bool,
}

impl SessionState {
    /// Read the token currently in storage.
    pub fn from_storage() -> Self {
        Self {
            token: storage::token(),
            loaded: true,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Persist `token` and mark the session signed in.
    pub fn sign_in(&mut self, token: String) {
        storage::save(storage::TOKEN_KEY, &token);
        self.token = Some(token);
        self.loaded = true;
    }

    /// Clear the persisted token.
    pub fn sign_out(&mut self) {
        storage::remove(storage::TOKEN_KEY);
        self.token = None;
    }
}
