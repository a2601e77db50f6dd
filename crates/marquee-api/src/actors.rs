//! Handlers for `/actors` endpoints.
//!
//! Same shape as [`crate::movies`] over `name` and `surname`.

use axum::{
  Json,
  extract::{Path, State},
};
use marquee_core::{
  actor::{ActorId, ActorPatch},
  store::CatalogStore,
};

use crate::{
  ApiState,
  body::JsonBody,
  error::ApiError,
  wire::{ActorRecord, Message, Reply},
};

/// `GET /actors`
pub async fn list<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<ActorRecord>>, ApiError> {
  let actors = state.store.list_actors().await.map_err(ApiError::store)?;
  Ok(Json(actors.into_iter().map(ActorRecord::from).collect()))
}

/// `GET /actors/:id`
pub async fn get_one<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(actor_id): Path<ActorId>,
) -> Result<Json<Reply<ActorRecord>>, ApiError> {
  let found = state.store.get_actor(actor_id).await.map_err(ApiError::store)?;
  let reply: Reply<ActorRecord> = match found {
    Some(actor) => Reply::Found(actor.into()),
    None => Message::new("Actor not found").into(),
  };
  Ok(Json(reply))
}

/// `POST /actors`
pub async fn create<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  JsonBody(body): JsonBody<ActorPatch>,
) -> Result<Json<Message>, ApiError> {
  let Ok(new) = body.into_new() else {
    return Ok(Json(Message::new("Missing required fields")));
  };
  let actor = state.store.add_actor(new).await.map_err(ApiError::store)?;
  tracing::debug!(id = actor.id, "actor added");
  Ok(Json(Message::created("Actor added successfully", actor.id)))
}

/// `PUT /actors/:id`
pub async fn update<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(actor_id): Path<ActorId>,
  JsonBody(patch): JsonBody<ActorPatch>,
) -> Result<Json<Message>, ApiError> {
  let updated = state
    .store
    .update_actor(actor_id, patch)
    .await
    .map_err(ApiError::store)?;
  let message = match updated {
    Some(_) => format!("Actor {actor_id} updated successfully"),
    None => "Actor not found.".to_string(),
  };
  Ok(Json(Message::new(message)))
}

/// `DELETE /actors/:id`
pub async fn delete_one<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(actor_id): Path<ActorId>,
) -> Result<Json<Message>, ApiError> {
  let deleted = state.store.delete_actor(actor_id).await.map_err(ApiError::store)?;
  let message = if deleted {
    format!("Actor {actor_id} deleted successfully")
  } else {
    "Actor not found.".to_string()
  };
  Ok(Json(Message::new(message)))
}

/// `DELETE /actors`
///
/// The singular "actor" in the reply is what existing clients match on.
pub async fn delete_all<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Message>, ApiError> {
  let n = state.store.delete_all_actors().await.map_err(ApiError::store)?;
  tracing::info!(count = n, "deleted all actors");
  Ok(Json(Message::new(format!("{n} actor have been deleted"))))
}
