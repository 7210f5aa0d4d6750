//! Session key lifecycle: generation at startup and in-memory storage.
//!
//! # Lifecycle
//!
//! 1. At startup, `main` calls [`SessionKeyStore::generate`] once to draw a
//!    fresh 256-bit key from the OS CSPRNG.
//! 2. The key lives only in process memory, wrapped in an `Arc<RwLock<_>>`,
//!    and is destroyed when the process exits. It is never persisted.
//! 3. Request handlers borrow the key via [`SessionKeyStore::current`], which
//!    acquires a short read lock and clones the bytes into a zeroed-on-drop
//!    buffer.
//!
//! # Security invariants
//!
//! - The key is **never** written to disk, logged, or included in traces.
//! - Every envelope sealed by this process is bound to this one key; a
//!   restart makes previously issued envelopes permanently unreadable.

pub mod store;

pub use store::SessionKeyStore;
