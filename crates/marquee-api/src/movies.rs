//! Handlers for `/movies` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/movies` | All movies, `[]` when empty |
//! | `POST`   | `/movies` | Body: `title`, `year`, `director`, `description`, all required |
//! | `DELETE` | `/movies` | Deletes every movie, reports the count |
//! | `GET`    | `/movies/:id` | `{"message":"Movie not found"}` if unknown |
//! | `PUT`    | `/movies/:id` | Partial update; unsent keys keep their value |
//! | `DELETE` | `/movies/:id` | |
//! | `GET`    | `/movies/:id/actors` | `{"message":"Actor not found"}` if none |
//!
//! Every "not found" outcome is a `200` message, never a `404`.

use axum::{
  Json,
  extract::{Path, State},
};
use marquee_core::{
  movie::{MovieId, MoviePatch},
  store::CatalogStore,
};

use crate::{
  ApiState,
  body::JsonBody,
  error::ApiError,
  wire::{ActorRecord, Message, MovieRecord, Reply},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /movies`
pub async fn list<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
  let movies = state.store.list_movies().await.map_err(ApiError::store)?;
  Ok(Json(movies.into_iter().map(MovieRecord::from).collect()))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /movies/:id`
pub async fn get_one<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(movie_id): Path<MovieId>,
) -> Result<Json<Reply<MovieRecord>>, ApiError> {
  let found = state.store.get_movie(movie_id).await.map_err(ApiError::store)?;
  let reply: Reply<MovieRecord> = match found {
    Some(movie) => Reply::Found(movie.into()),
    None => Message::new("Movie not found").into(),
  };
  Ok(Json(reply))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /movies`
pub async fn create<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  JsonBody(body): JsonBody<MoviePatch>,
) -> Result<Json<Message>, ApiError> {
  let Ok(new) = body.into_new() else {
    return Ok(Json(Message::new("Missing required fields")));
  };
  let movie = state.store.add_movie(new).await.map_err(ApiError::store)?;
  tracing::debug!(id = movie.id, title = %movie.title, "movie added");
  Ok(Json(Message::created("Movie added successfully", movie.id)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /movies/:id`
pub async fn update<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(movie_id): Path<MovieId>,
  JsonBody(patch): JsonBody<MoviePatch>,
) -> Result<Json<Message>, ApiError> {
  let updated = state
    .store
    .update_movie(movie_id, patch)
    .await
    .map_err(ApiError::store)?;
  let message = match updated {
    Some(_) => format!("Movie {movie_id} updated successfully"),
    None => "Movie not found.".to_string(),
  };
  Ok(Json(Message::new(message)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /movies/:id`
pub async fn delete_one<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(movie_id): Path<MovieId>,
) -> Result<Json<Message>, ApiError> {
  let deleted = state.store.delete_movie(movie_id).await.map_err(ApiError::store)?;
  let message = if deleted {
    format!("Movie {movie_id} deleted successfully")
  } else {
    "Movie not found.".to_string()
  };
  Ok(Json(Message::new(message)))
}

/// `DELETE /movies`
pub async fn delete_all<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Message>, ApiError> {
  let n = state.store.delete_all_movies().await.map_err(ApiError::store)?;
  tracing::info!(count = n, "deleted all movies");
  Ok(Json(Message::new(format!("{n} movies have been deleted"))))
}

// ─── Cast ─────────────────────────────────────────────────────────────────────

/// `GET /movies/:id/actors`
///
/// An unknown movie and a movie with no linked actors both answer
/// `{"message":"Actor not found"}`.
pub async fn actors<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(movie_id): Path<MovieId>,
) -> Result<Json<Reply<Vec<ActorRecord>>>, ApiError> {
  let cast = state.store.movie_actors(movie_id).await.map_err(ApiError::store)?;
  let reply: Reply<Vec<ActorRecord>> = if cast.is_empty() {
    Message::new("Actor not found").into()
  } else {
    Reply::Found(cast.into_iter().map(ActorRecord::from).collect())
  };
  Ok(Json(reply))
}
