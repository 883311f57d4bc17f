//! Handlers for the `/auth` resource (login, current user, token check).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bakehouse_core::error::CoreError;
use bakehouse_db::models::user::UserResponse;
use bakehouse_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::issue_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Message returned for both unknown emails and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Payload for `POST /auth/validate`.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a Bearer access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let issued = issue_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse::new(AuthResponse {
        access_token: issued.token,
        expires_in: issued.expires_in,
        user: UserResponse::from(user),
    })))
}

/// GET /api/auth/me
///
/// Profile of the user the token was issued to.
pub async fn me(auth_user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(DataResponse::new(UserResponse::from(user))))
}

/// POST /api/auth/validate
///
/// Succeeds only when the Bearer token is valid.
pub async fn validate(_auth_user: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse::new(ValidateResponse { valid: true })))
}
