//! Shared application state injected into every Axum handler.

use crate::key::SessionKeyStore;

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable (`Arc`-backed) so that Axum can clone the
/// state for each request without copying expensive data.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe holder for the process-lifetime session key.
    pub key_store: SessionKeyStore,
}

impl AppState {
    /// Create a new [`AppState`] around the provided key store.
    pub fn new(key_store: SessionKeyStore) -> Self {
        Self { key_store }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with an empty key store, suitable for tests.
    fn default() -> Self {
        Self::new(SessionKeyStore::new())
    }
}
