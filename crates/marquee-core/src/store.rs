//! The `CatalogStore` trait.
//!
//! Implemented by storage backends (e.g. `marquee-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Lookups return `Ok(None)` / `Ok(false)` for unknown ids; `Err` is reserved
//! for backend failures.

use std::future::Future;

use crate::{
  actor::{Actor, ActorId, ActorPatch, NewActor},
  movie::{Movie, MovieId, MoviePatch, NewMovie},
};

/// Abstraction over a movie catalog backend.
///
/// Implementations must not hold a transaction open across calls; every
/// method is a self-contained unit of work.
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Movies ────────────────────────────────────────────────────────────

  /// All movies in the store's natural order.
  fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  fn get_movie(
    &self,
    id: MovieId,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Insert a movie and return it with its store-assigned id.
  fn add_movie(&self, movie: NewMovie)
  -> impl Future<Output = Result<Movie, Self::Error>> + Send + '_;

  /// Overlay `patch` on the stored row and write all columns back.
  /// Returns `None` if no movie has this id.
  fn update_movie(
    &self,
    id: MovieId,
    patch: MoviePatch,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Returns `false` if no movie has this id.
  fn delete_movie(&self, id: MovieId)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete every movie and return how many rows went.
  fn delete_all_movies(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Actors ────────────────────────────────────────────────────────────

  fn list_actors(&self) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;

  fn get_actor(
    &self,
    id: ActorId,
  ) -> impl Future<Output = Result<Option<Actor>, Self::Error>> + Send + '_;

  fn add_actor(&self, actor: NewActor)
  -> impl Future<Output = Result<Actor, Self::Error>> + Send + '_;

  fn update_actor(
    &self,
    id: ActorId,
    patch: ActorPatch,
  ) -> impl Future<Output = Result<Option<Actor>, Self::Error>> + Send + '_;

  fn delete_actor(&self, id: ActorId)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn delete_all_actors(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Associations ──────────────────────────────────────────────────────

  /// Actors linked to `movie_id`.
  ///
  /// An empty result does not tell a movie without actors apart from a
  /// movie that does not exist.
  fn movie_actors(
    &self,
    movie_id: MovieId,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;
}
