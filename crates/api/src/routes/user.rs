//! Route definitions for admin user lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/admin/users`.
///
/// ```text
/// GET /lookup?email=  -> lookup_by_email
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/lookup", get(user::lookup_by_email))
}
