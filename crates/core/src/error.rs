//! Domain errors. The HTTP layer decides status codes; this crate only
//! says what went wrong.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of kind `entity` has this id.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// Input broke a domain rule. The message is shown to the client.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing or bad credentials.
    #[error("not authenticated: {0}")]
    Unauthorized(String),

    /// Authenticated, but the role does not allow the action.
    #[error("not permitted: {0}")]
    Forbidden(String),

    /// Something that is never the caller's fault. Not shown to clients.
    #[error("internal: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
