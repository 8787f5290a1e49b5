//! Error types for the verification service.

use affinity_core::{ProofError, RequestError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
///
/// Every variant becomes a JSON body `{"error": "..."}` with the status code
/// from [`ApiError::status_code`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Boundary rejection (bad JSON, wrong shape, empty address list)
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Proof envelope had no usable publicData
    #[error(transparent)]
    Proof(#[from] ProofError),

    #[error("Unknown endpoint: {method} {path}")]
    NotFound { method: String, path: String },

    /// Internal error; detail is logged, never returned
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// - Request / Proof: 400 Bad Request
    /// - NotFound: 404 Not Found
    /// - Internal: 500 Internal Server Error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Request(_) | Self::Proof(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client.
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "Failed to process verification".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.client_message() });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Startup and serving errors for the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to bind after {attempts} attempts (last port {port}): {source}")]
    Bind {
        attempts: u16,
        port: u16,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::from(RequestError::InvalidJson).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RequestError::Malformed).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RequestError::EmptyAddressList).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProofError::InvalidFormat).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound {
                method: "GET".into(),
                path: "/nope".into()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(
            ApiError::from(RequestError::EmptyAddressList).client_message(),
            "No addresses found in the provided data"
        );
        assert_eq!(
            ApiError::from(ProofError::MissingAddressData).client_message(),
            "Proof received but could not extract address data."
        );
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let err = ApiError::Internal("serializer exploded at byte 12".into());
        assert_eq!(err.client_message(), "Failed to process verification");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
