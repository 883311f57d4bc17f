//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use bakehouse_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is up but the database did not answer.
    Degraded,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    pub timestamp: Timestamp,
}

/// GET /health
///
/// Always 200; a failed database probe shows up as `"degraded"`.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match bakehouse_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health probe failed");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        timestamp: chrono::Utc::now(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
