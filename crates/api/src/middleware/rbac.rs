//! Admin-only guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bakehouse_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An [`AuthUser`] whose role is `ADMIN`.
///
/// Put it first in the handler's argument list so unauthenticated and
/// non-admin callers are turned away (401 / 403) before any body parsing.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::info!(user_id = %user.user_id, role = %user.role, "Admin route refused");
            return Err(AppError::Core(CoreError::Forbidden("Admin role required".into())));
        }
        Ok(Self(user))
    }
}
