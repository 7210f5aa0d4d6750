//! [`SessionKeyStore`]: thread-safe holder for the process-lifetime session key.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::envelope::codec;
use crate::envelope::KEY_LEN;

/// Errors produced by the key layer.
#[derive(Debug, Error)]
pub enum KeyError {
    /// No session key has been generated yet.
    #[error("session key not yet initialised")]
    NotInitialised,
}

/// Fixed-size key buffer that holds exactly [`KEY_LEN`] bytes.
///
/// Stored inside [`SessionKeyStore`]; cloned into handler call stacks when
/// needed. When this type is dropped, the memory is overwritten with zeroes
/// to minimise the window during which key material lives in RAM.
#[derive(Clone)]
pub struct KeyBytes(pub Box<[u8; KEY_LEN]>);

impl Drop for KeyBytes {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material, not even in debug builds.
        f.write_str("KeyBytes([REDACTED])")
    }
}

/// Thread-safe store for the session key.
///
/// The key is generated once at startup and lives for the process lifetime.
/// Wraps an `Arc<RwLock<Option<KeyBytes>>>` so that many concurrent
/// read-lock holders (request handlers) can borrow the key simultaneously
/// while startup performs the single write.
#[derive(Clone, Debug)]
pub struct SessionKeyStore {
    inner: Arc<RwLock<Option<KeyBytes>>>,
}

impl SessionKeyStore {
    /// Create a new, empty [`SessionKeyStore`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns `true` if a session key is currently held.
    pub async fn is_ready(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Draw a fresh random 256-bit key from the OS CSPRNG and store it.
    ///
    /// Intended to be called exactly once at startup; calling it again
    /// replaces the key, orphaning every envelope sealed under the old one.
    pub async fn generate(&self) {
        let key = codec::generate_key();
        let mut lock = self.inner.write().await;
        *lock = Some(KeyBytes(Box::new(key)));
    }

    /// Borrow a clone of the current key bytes.
    ///
    /// The clone is a short-lived copy; callers should use and drop it promptly.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NotInitialised`] if no key has been generated yet.
    pub async fn current(&self) -> Result<KeyBytes, KeyError> {
        let lock = self.inner.read().await;
        lock.as_ref().cloned().ok_or(KeyError::NotInitialised)
    }
}

impl Default for SessionKeyStore {
    fn default() -> Self {
        Self::new()
    }
}
