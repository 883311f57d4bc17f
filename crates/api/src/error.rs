//! HTTP error type.
//!
//! Every failure leaves the API as `{ "success": false, "error": "<message>" }`.
//! Internal details (database errors, hashing failures) are logged and replaced
//! with a generic message.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bakehouse_core::error::CoreError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed input that never reached domain validation (bad JSON,
    /// non-UUID path segment, missing query parameter).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found by something other than an id, e.g. a user email.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Core(errors.into())
    }
}

macro_rules! bad_request_from_rejection {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    Self::BadRequest(rejection.body_text())
                }
            }
        )+
    };
}

bad_request_from_rejection!(JsonRejection, PathRejection, QueryRejection);

impl AppError {
    /// Status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Core(CoreError::NotFound { entity, id }) => {
                (StatusCode::NOT_FOUND, format!("{entity} with id {id} not found"))
            }
            Self::Core(CoreError::Validation(msg)) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Core(CoreError::Conflict(msg)) => (StatusCode::CONFLICT, msg.clone()),
            Self::Core(CoreError::Unauthorized(msg)) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::Core(CoreError::Forbidden(msg)) => (StatusCode::FORBIDDEN, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Database(err) => database_status(err),
            Self::Core(CoreError::Internal(detail)) | Self::InternalError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_owned())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

/// Map a sqlx error to a response.
///
/// `RowNotFound` is 404 and a violated `uq_*` unique constraint is 409.
/// Anything else is logged and reported as a generic 500.
fn database_status(err: &sqlx::Error) -> (StatusCode, String) {
    if let sqlx::Error::RowNotFound = err {
        return (StatusCode::NOT_FOUND, "Resource not found".to_owned());
    }

    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_owned())
}
