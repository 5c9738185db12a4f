//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies and,
//! for JSON, a 422 status. These wrappers turn every rejection into a 400
//! `{ success: false, ... }` envelope like the rest of the API.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// URL path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// URL query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
