//! AES-256-GCM sealing and opening of category-tagged message envelopes.
//!
//! **Nonce discipline:** a fresh 96-bit nonce is drawn from the OS CSPRNG for
//! every seal operation. Nonce reuse under the same key is catastrophic for
//! GCM — it breaks both confidentiality and authentication. Never cache or
//! share a nonce across calls.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::Category;
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// A sealed envelope: everything a holder of the key needs to recover the
/// plaintext.
///
/// The ciphertext string is `<IMG|DNS|STR><base64(ciphertext+tag)>` — a
/// 3-byte category prefix directly followed by standard base64 (with
/// padding), no separator. The nonce travels alongside as its own base64
/// string rather than embedded in the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Category-prefixed base64 ciphertext (including the 16-byte GCM tag).
    pub ciphertext: String,
    /// Base64-encoded 12-byte nonce.
    pub nonce: String,
}

/// Errors produced by the codec layer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes")]
    InvalidKeyLength,

    /// AES-GCM encryption failed.
    #[error("encryption failed")]
    EncryptionFailure,

    /// The envelope could not be opened. Deliberately covers every decrypt
    /// failure mode — malformed base64, wrong nonce length, wrong key,
    /// tampered or truncated ciphertext — so callers cannot probe for the
    /// specific cause.
    #[error("decryption failed")]
    DecryptionFailure,
}

/// Generate a fresh random 256-bit key from the OS CSPRNG.
///
/// The key is usable for both [`encrypt_message`] and [`decrypt_message`].
/// Callers own the lifetime of the returned bytes; the service stores one
/// such key per process in the session key store.
pub fn generate_key() -> [u8; KEY_LEN] {
    use aes_gcm::aead::rand_core::RngCore;
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    key
}

/// Seal `plaintext` into a category-tagged envelope using AES-256-GCM.
///
/// A random 96-bit nonce is generated per call via the OS CSPRNG; the
/// 128-bit authentication tag is appended to the ciphertext by the cipher.
///
/// # Errors
///
/// Returns [`CodecError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CodecError::EncryptionFailure`] on an internal AEAD error
/// (should be unreachable with a valid key and nonce).
pub fn encrypt_message(
    plaintext: &str,
    key: &[u8],
    category: Category,
) -> Result<Envelope, CodecError> {
    let cipher = build_cipher(key)?;

    // Use OsRng for a cryptographically secure random nonce.
    use aes_gcm::aead::rand_core::RngCore;
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|_| CodecError::EncryptionFailure)?;

    Ok(Envelope {
        ciphertext: format!("{}{}", category.prefix(), STANDARD.encode(&ciphertext)),
        nonce: STANDARD.encode(nonce_bytes),
    })
}

/// Open a tagged envelope back into its plaintext and category.
///
/// The first 3 characters select the category (`IMG`/`DNS`/`STR`); a string
/// carrying none of the known prefixes is treated as untagged `stream`
/// ciphertext in its entirety.
///
/// # Errors
///
/// Returns [`CodecError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Every other failure — bad base64 in either input, a nonce that is not
/// [`NONCE_LEN`] bytes, authentication failure, non-UTF-8 recovered bytes —
/// returns the generic [`CodecError::DecryptionFailure`].
pub fn decrypt_message(
    tagged_ciphertext: &str,
    nonce: &str,
    key: &[u8],
) -> Result<(String, Category), CodecError> {
    let cipher = build_cipher(key)?;

    let (category, payload) = Category::split_tagged(tagged_ciphertext);

    let ciphertext = STANDARD
        .decode(payload)
        .map_err(|_| CodecError::DecryptionFailure)?;
    let nonce_bytes = STANDARD
        .decode(nonce)
        .map_err(|_| CodecError::DecryptionFailure)?;
    if nonce_bytes.len() != NONCE_LEN {
        return Err(CodecError::DecryptionFailure);
    }
    let nonce = Nonce::from_slice(&nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext.as_ref())
        .map_err(|_| CodecError::DecryptionFailure)?;

    let plaintext = String::from_utf8(plaintext).map_err(|_| CodecError::DecryptionFailure)?;
    Ok((plaintext, category))
}

fn build_cipher(key: &[u8]) -> Result<Aes256Gcm, CodecError> {
    if key.len() != KEY_LEN {
        return Err(CodecError::InvalidKeyLength);
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| CodecError::InvalidKeyLength)
}
