//! Bearer-token authentication.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use bakehouse_core::error::CoreError;
use bakehouse_core::roles::ROLE_ADMIN;
use bakehouse_core::types::DbId;

use crate::auth::jwt::decode_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller identified by a valid `Authorization: Bearer <jwt>` header.
///
/// Taking `AuthUser` as a handler argument makes the route require login;
/// the request is rejected with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_owned()))
}

/// Pull the raw token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid text"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Expected Authorization: Bearer <token>"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = decode_access_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(Self {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
