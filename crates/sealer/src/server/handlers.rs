//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ErrorResponse,
    HealthResponse,
};
use common::ServiceError;
use tracing::warn;

use super::state::AppState;
use crate::envelope::codec::{decrypt_message, encrypt_message};

/// Convert a [`ServiceError`] into its JSON error response.
fn error_response(err: &ServiceError) -> Response {
    let code = match err {
        ServiceError::BadRequest(_) => "bad_request",
        ServiceError::DecryptionFailure => "decryption_failure",
        ServiceError::EncryptionFailure(_) => "internal_error",
        ServiceError::Unavailable(_) => "service_unavailable",
        ServiceError::Internal(_) => "internal_error",
    };
    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(code, err.to_string()))).into_response()
}

/// `POST /encrypt` — seal a plaintext into a category-tagged envelope.
///
/// Returns the prefixed base64 ciphertext and the base64 nonce. Both must be
/// presented together to `POST /decrypt` to recover the plaintext.
pub async fn encrypt(State(state): State<AppState>, Json(req): Json<EncryptRequest>) -> Response {
    // Borrow the session key — 503 until startup has generated it.
    let key = match state.key_store.current().await {
        Ok(k) => k,
        Err(e) => return error_response(&ServiceError::Unavailable(e.to_string())),
    };

    match encrypt_message(&req.plaintext, &key.0[..], req.category) {
        Ok(envelope) => (
            StatusCode::OK,
            Json(EncryptResponse {
                ciphertext: envelope.ciphertext,
                nonce: envelope.nonce,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "encryption failed");
            error_response(&ServiceError::EncryptionFailure(e.to_string()))
        }
    }
}

/// `POST /decrypt` — open an envelope back into plaintext and category.
///
/// Any failure produces one generic 400 response. The body never reveals
/// whether the base64, nonce, key, or authentication tag was at fault.
pub async fn decrypt(State(state): State<AppState>, Json(req): Json<DecryptRequest>) -> Response {
    let key = match state.key_store.current().await {
        Ok(k) => k,
        Err(e) => return error_response(&ServiceError::Unavailable(e.to_string())),
    };

    match decrypt_message(&req.ciphertext, &req.nonce, &key.0[..]) {
        Ok((plaintext, category)) => (
            StatusCode::OK,
            Json(DecryptResponse {
                plaintext,
                category,
            }),
        )
            .into_response(),
        // Single generic error regardless of the failure mode.
        Err(_) => error_response(&ServiceError::DecryptionFailure),
    }
}

/// `GET /health` — liveness and readiness check.
///
/// Returns `200 OK` once the session key has been generated at startup.
/// Returns `503 Service Unavailable` otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    let key_ready = state.key_store.is_ready().await;

    let (status_code, status_str) = if key_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status: status_str.into(),
        key_ready,
    };
    (status_code, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::{get, post};
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/health", get(health))
            .with_state(AppState::default())
    }

    #[tokio::test]
    async fn health_returns_503_when_not_ready() {
        let app = test_router();
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn health_returns_200_once_key_generated() {
        let state = AppState::default();
        state.key_store.generate().await;
        let app = Router::new().route("/health", get(health)).with_state(state);
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn encrypt_returns_503_without_key() {
        let app = Router::new()
            .route("/encrypt", post(encrypt))
            .with_state(AppState::default());
        let req = Request::builder()
            .method("POST")
            .uri("/encrypt")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"plaintext":"hi","category":"image"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn decrypt_garbage_returns_400() {
        let state = AppState::default();
        state.key_store.generate().await;
        let app = Router::new()
            .route("/decrypt", post(decrypt))
            .with_state(state);
        let req = Request::builder()
            .method("POST")
            .uri("/decrypt")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"ciphertext":"DNS!!!","nonce":"also not base64"}"#,
            ))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_maps_status_codes() {
        let resp = error_response(&ServiceError::DecryptionFailure);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = error_response(&ServiceError::Unavailable("x".into()));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let resp = error_response(&ServiceError::EncryptionFailure("x".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
