//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Domain outcomes such as "Movie not found" are not errors here; handlers
//! return them as ordinary `200` [`Message`](crate::wire::Message) payloads.
//! `ApiError` covers the failures that do change the status code.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("geocoder error: {0}")]
  Upstream(#[from] reqwest::Error),
}

impl ApiError {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(err))
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
