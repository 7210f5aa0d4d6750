//! Request and response types exchanged between the service and its callers.
//!
//! These types are serialised as JSON over the HTTP API.

use serde::{Deserialize, Serialize};

use crate::category::Category;

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// UTF-8 plaintext to seal.
    pub plaintext: String,
    /// Category the envelope is tagged with.
    pub category: Category,
}

/// Successful response body for `POST /encrypt`.
///
/// Both fields are needed to open the envelope again; the nonce is not
/// embedded in the ciphertext string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// Category-prefixed, base64-encoded ciphertext (`IMG`/`DNS`/`STR` + base64).
    pub ciphertext: String,
    /// Base64-encoded 12-byte nonce drawn for this envelope.
    pub nonce: String,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Tagged ciphertext string as returned by `POST /encrypt`.
    pub ciphertext: String,
    /// Base64-encoded nonce as returned by `POST /encrypt`.
    pub nonce: String,
}

/// Successful response body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// Recovered UTF-8 plaintext.
    pub plaintext: String,
    /// Category recovered from the ciphertext prefix.
    pub category: Category,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the session key has been generated and is ready for use.
    pub key_ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_request_round_trip() {
        let req = EncryptRequest {
            plaintext: "hello".into(),
            category: Category::Dns,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"dns\""));
        let decoded: EncryptRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.plaintext, "hello");
        assert_eq!(decoded.category, Category::Dns);
    }

    #[test]
    fn decrypt_request_round_trip() {
        let req = DecryptRequest {
            ciphertext: "STRQWJjZA==".into(),
            nonce: "AAAAAAAAAAAAAAAA".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let decoded: DecryptRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.ciphertext, "STRQWJjZA==");
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("bad_request", "missing plaintext field");
        assert_eq!(e.code, "bad_request");
        assert!(e.message.contains("missing plaintext field"));
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse {
            status: "ok".into(),
            key_ready: true,
        };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert!(decoded.key_ready);
    }
}
