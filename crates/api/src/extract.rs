//! Extractor wrappers that reject with [`AppError`] instead of axum's
//! plain-text rejections, so malformed bodies, ids and query strings get the
//! same `{ "success": false, "error": ... }` envelope with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. A body that fails to parse yields 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor. A malformed id (e.g. not a UUID) yields 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query-string extractor. Missing or malformed parameters yield 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
