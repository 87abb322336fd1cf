//! Bucketlog — API error types.

use axum::Json;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bucketlog_core::error::{DomainError, NotFound};
use serde::Serialize;
use thiserror::Error;

/// Detail text returned for storage failures. The cause is logged, never
/// sent to the client.
const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub detail: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::MalformedRequest(rejection.body_text()))
    }
}

/// A path segment that does not decode as UTF-8 can never be a valid bucket
/// and can never name a stored event.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let bad_event_id = matches!(
            &rejection,
            PathRejection::FailedToDeserializePathParams(err)
                if matches!(err.kind(), ErrorKind::InvalidUtf8InPathParam { key } if key == "event_id")
        );
        if bad_event_id {
            Self(NotFound::Event.into())
        } else {
            Self(DomainError::InvalidBucketId(rejection.body_text()))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            DomainError::InvalidBucketId(_) | DomainError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            DomainError::Storage(cause) => {
                tracing::error!(error = %cause, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_DETAIL.to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
