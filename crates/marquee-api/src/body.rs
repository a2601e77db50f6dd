//! Request-body extractor for the catalog handlers.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// [`axum::Json`] with rejections reported as [`ApiError::BadRequest`], so a
/// body that fails to parse gets the usual `{"error": ..}` reply.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
