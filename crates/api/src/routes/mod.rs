pub mod auth;
pub mod faq;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/me                     current user (requires auth)
/// /auth/validate               token check (requires auth)
///
/// /faqs                        published FAQs (public)
///
/// /admin/faqs                  list all, create (admin only)
/// /admin/faqs/reorder          bulk reorder (PUT)
/// /admin/faqs/{id}             get, update (PATCH), delete
///
/// /admin/users/lookup          find user by email (?email=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/faqs", faq::public_router())
        .nest("/admin/faqs", faq::admin_router())
        .nest("/admin/users", user::admin_router())
}
