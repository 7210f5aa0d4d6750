//! AES-256-GCM envelope primitives.
//!
//! This module is intentionally free of HTTP dependencies. It provides the
//! low-level seal/open operations used by the request handlers.
//!
//! # Envelope format
//!
//! ```text
//! ciphertext: <IMG|DNS|STR><base64(ciphertext+tag)>
//! nonce:      <base64(12 random bytes)>
//! ```
//!
//! The 3-byte prefix records the category the message was sealed under; it
//! is informational only and takes no part in the cryptography.

pub mod codec;

pub use codec::KEY_LEN;
