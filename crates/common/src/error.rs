//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::DecryptionFailure`] → 400
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::Unavailable`] → 503
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — invalid JSON or missing fields.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An envelope could not be opened. The message is intentionally generic:
    /// callers must not learn whether the base64, nonce, key, or tag was at
    /// fault.
    #[error("decryption failed")]
    DecryptionFailure,

    /// Sealing failed due to a crypto-layer error.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// The session key is not yet initialised.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::DecryptionFailure => 400,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::Unavailable(_) => 503,
            ServiceError::Internal(_) => 500,
        }
    }
}
