//! `/health` plus the cross-cutting middleware: request ids, CORS, and
//! routing fallbacks.

mod common;

use axum::body::Body;
use axum::http::header::{HeaderMap, ORIGIN};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

/// Send a bare request with extra headers and return status plus headers.
async fn raw(pool: PgPool, method: Method, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let response = common::build_test_app(pool)
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    (response.status(), response.headers().clone())
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok_with_database(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response).await;
    assert_eq!(report["status"], "ok");
    assert_eq!(report["dbHealthy"], true);
    assert_eq!(report["version"], env!("CARGO_PKG_VERSION"));
    assert!(report["timestamp"].as_str().is_some_and(|ts| ts.contains('T')));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_lives_outside_api_prefix(pool: PgPool) {
    let (status, _) = raw(pool, Method::GET, "/api/health", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unmatched_path_is_404(pool: PgPool) {
    let (status, _) = raw(pool, Method::GET, "/api/cakes", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_method_is_405(pool: PgPool) {
    let (status, _) = raw(pool, Method::DELETE, "/api/faqs", &[]).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generated_request_id_is_a_uuid(pool: PgPool) {
    let (_, headers) = raw(pool, Method::GET, "/health", &[]).await;

    let id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id should be set on every response");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {id}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn caller_request_id_is_echoed(pool: PgPool) {
    let (_, headers) = raw(
        pool,
        Method::GET,
        "/health",
        &[("x-request-id", "bakery-trace-1")],
    )
    .await;

    assert_eq!(headers["x-request-id"], "bakery-trace-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_dashboard_is_allowed(pool: PgPool) {
    let (status, headers) = raw(
        pool,
        Method::OPTIONS,
        "/api/admin/faqs/reorder",
        &[
            ("origin", "http://localhost:4200"),
            ("access-control-request-method", "PUT"),
            ("access-control-request-headers", "content-type,authorization"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:4200");
    assert_eq!(headers["access-control-allow-credentials"], "true");

    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("PUT"), "allow-methods was {methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_origin_gets_no_cors_grant(pool: PgPool) {
    let (status, headers) = raw(
        pool,
        Method::GET,
        "/health",
        &[(ORIGIN.as_str(), "http://evil.example")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!headers.contains_key("access-control-allow-origin"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_and_request_id_wrap_error_responses(pool: PgPool) {
    let (status, headers) = raw(
        pool,
        Method::GET,
        "/api/admin/faqs",
        &[(ORIGIN.as_str(), "http://localhost:4200")],
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:4200");
    assert!(headers.contains_key("x-request-id"));
}
