//! Shared response envelope types for API handlers.
//!
//! Every response carries a `success` flag. Successful payloads use
//! `{ "success": true, "data": ... }` or `{ "success": true, "message": ... }`;
//! errors are rendered by [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": "..." }` for mutations with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
