//! Admin user lookup.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bakehouse_db::models::user::UserResponse;
use bakehouse_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/users/lookup`.
#[derive(Debug, Deserialize)]
pub struct EmailLookupParams {
    pub email: String,
}

/// GET /api/admin/users/lookup?email=
pub async fn lookup_by_email(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EmailLookupParams>,
) -> AppResult<impl IntoResponse> {
    let email = params.email.trim();
    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with email {email}")))?;

    Ok(Json(DataResponse::new(UserResponse::from(user))))
}
