//! Greeting and arithmetic routes. No state, no store access.

use axum::{
  Json,
  extract::{Path, Query},
};
use serde::Deserialize;

use crate::{error::ApiError, wire::Message};

/// `GET /`
pub async fn root() -> Json<Message> {
  Json(Message::new("Hello World"))
}

/// `GET /hello/:name`
pub async fn hello(Path(name): Path<String>) -> Json<Message> {
  Json(Message::new(format!("Hello {name}")))
}

#[derive(Debug, Deserialize)]
pub struct SumParams {
  #[serde(default)]
  pub x: i64,
  #[serde(default = "default_y")]
  pub y: i64,
}

fn default_y() -> i64 {
  10
}

/// `GET /sum[?x=<int>][&y=<int>]` — replies with a bare JSON number.
pub async fn sum(Query(params): Query<SumParams>) -> Result<Json<i64>, ApiError> {
  params
    .x
    .checked_add(params.y)
    .map(Json)
    .ok_or_else(|| ApiError::BadRequest(format!("{} + {} overflows", params.x, params.y)))
}
