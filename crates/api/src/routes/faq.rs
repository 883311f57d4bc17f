//! Route definitions for the FAQ resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET /  -> list_published
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(faq::list_published))
}

/// Routes mounted at `/admin/faqs`.
///
/// All routes require the `ADMIN` role (enforced by handler extractors).
/// The static `/reorder` segment takes precedence over `/{id}`.
///
/// ```text
/// GET    /          -> list_all
/// POST   /          -> create_faq
/// PUT    /reorder   -> reorder_faqs
/// GET    /{id}      -> get_faq
/// PATCH  /{id}      -> update_faq
/// DELETE /{id}      -> delete_faq
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list_all).post(faq::create_faq))
        .route("/reorder", put(faq::reorder_faqs))
        .route(
            "/{id}",
            get(faq::get_faq)
                .patch(faq::update_faq)
                .delete(faq::delete_faq),
        )
}
