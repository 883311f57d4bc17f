//! Handlers for the FAQ resource.
//!
//! `GET /faqs` is public and returns published entries only. Everything
//! under `/admin/faqs` requires the `ADMIN` role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bakehouse_core::faq::ReorderItem;
use bakehouse_core::types::DbId;
use bakehouse_db::models::faq::{CreateFaq, UpdateFaq};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse};
use crate::services::faq::FaqService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/faqs
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let faqs = FaqService::list_published(&state.pool).await?;
    Ok(Json(DataResponse::new(faqs)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/faqs
///
/// All FAQs including unpublished ones.
pub async fn list_all(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let faqs = FaqService::list_all(&state.pool).await?;
    Ok(Json(DataResponse::new(faqs)))
}

/// GET /api/admin/faqs/{id}
pub async fn get_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqService::get(&state.pool, id).await?;
    Ok(Json(DataResponse::new(faq)))
}

/// POST /api/admin/faqs
///
/// Creates the FAQ at the end of the display order. Returns 201.
pub async fn create_faq(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqService::create(&state.pool, &input).await?;
    tracing::debug!(user_id = %admin.user_id, faq_id = %faq.id, "Admin created FAQ");
    Ok((StatusCode::CREATED, Json(DataResponse::new(faq))))
}

/// PATCH /api/admin/faqs/{id}
pub async fn update_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqService::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse::new(faq)))
}

/// DELETE /api/admin/faqs/{id}
pub async fn delete_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    FaqService::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("FAQ deleted")))
}

/// PUT /api/admin/faqs/reorder
///
/// Body is the full list as `[{ "id": uuid, "order": int }, ...]`.
pub async fn reorder_faqs(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(items): AppJson<Vec<ReorderItem>>,
) -> AppResult<impl IntoResponse> {
    FaqService::reorder(&state.pool, &items).await?;
    Ok(Json(MessageResponse::new("FAQs reordered")))
}
