//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use marquee_core::{
  actor::{Actor, ActorId, ActorPatch, NewActor},
  movie::{Movie, MovieId, MoviePatch, NewMovie},
  store::CatalogStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  rows::{self, ACTOR_COLUMNS, MOVIE_COLUMNS},
  schema::{CONNECTION_PRAGMAS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie catalog backed by a single SQLite file.
///
/// The store holds only the file path. Each operation opens a fresh
/// connection, runs its statements, and closes the connection again, so no
/// two requests ever share a connection or a transaction. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  path: Arc<PathBuf>,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self { path: Arc::new(path.as_ref().to_path_buf()) };
    store
      .with_conn(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!(path = ?store.path, "catalog schema ready");
    Ok(store)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Run `f` on a connection opened just for this call.
  ///
  /// The connection is closed before returning on every path, including
  /// when `f` fails.
  async fn with_conn<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let conn = tokio_rusqlite::Connection::open(self.path.as_path())
      .await
      .map_err(|source| {
        tracing::warn!(path = ?self.path, error = %source, "failed to open database");
        Error::Open { path: self.path.to_path_buf(), source }
      })?;

    let outcome = conn
      .call(move |conn| {
        conn.execute_batch(CONNECTION_PRAGMAS)?;
        f(conn)
      })
      .await;
    let closed = conn.close().await;

    let value = outcome?;
    closed?;
    Ok(value)
  }

  /// Record that `actor_id` appears in `movie_id`.
  ///
  /// Links are not writable over HTTP; this exists for seeding data.
  /// Linking the same pair twice is a no-op.
  pub async fn link_actor(&self, movie_id: MovieId, actor_id: ActorId) -> Result<()> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT OR IGNORE INTO movie_actor_through (movie_id, actor_id) VALUES (?1, ?2)",
          rusqlite::params![movie_id, actor_id],
        )?;
        Ok(())
      })
      .await
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = Error;

  // ── Movies ────────────────────────────────────────────────────────────────

  async fn list_movies(&self) -> Result<Vec<Movie>> {
    self
      .with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movie"))?;
        let movies = stmt
          .query_map([], rows::movie)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
      })
      .await
  }

  async fn get_movie(&self, id: MovieId) -> Result<Option<Movie>> {
    self
      .with_conn(move |conn| Ok(select_movie(conn, id)?))
      .await
  }

  async fn add_movie(&self, movie: NewMovie) -> Result<Movie> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO movie (title, year, director, description) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![movie.title, movie.year, movie.director, movie.description],
        )?;
        Ok(movie.with_id(conn.last_insert_rowid()))
      })
      .await
  }

  async fn update_movie(&self, id: MovieId, patch: MoviePatch) -> Result<Option<Movie>> {
    self
      .with_conn(move |conn| {
        let Some(current) = select_movie(conn, id)? else {
          return Ok(None);
        };
        let movie = patch.apply(current);
        conn.execute(
          "UPDATE movie SET title = ?1, year = ?2, director = ?3, description = ?4
           WHERE id = ?5",
          rusqlite::params![movie.title, movie.year, movie.director, movie.description, id],
        )?;
        Ok(Some(movie))
      })
      .await
  }

  async fn delete_movie(&self, id: MovieId) -> Result<bool> {
    self
      .with_conn(move |conn| {
        let deleted = conn.execute("DELETE FROM movie WHERE id = ?1", rusqlite::params![id])?;
        Ok(deleted > 0)
      })
      .await
  }

  async fn delete_all_movies(&self) -> Result<usize> {
    self
      .with_conn(|conn| Ok(conn.execute("DELETE FROM movie", [])?))
      .await
  }

  // ── Actors ────────────────────────────────────────────────────────────────

  async fn list_actors(&self) -> Result<Vec<Actor>> {
    self
      .with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {ACTOR_COLUMNS} FROM actor"))?;
        let actors = stmt
          .query_map([], rows::actor)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(actors)
      })
      .await
  }

  async fn get_actor(&self, id: ActorId) -> Result<Option<Actor>> {
    self
      .with_conn(move |conn| Ok(select_actor(conn, id)?))
      .await
  }

  async fn add_actor(&self, actor: NewActor) -> Result<Actor> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO actor (name, surname) VALUES (?1, ?2)",
          rusqlite::params![actor.name, actor.surname],
        )?;
        Ok(actor.with_id(conn.last_insert_rowid()))
      })
      .await
  }

  async fn update_actor(&self, id: ActorId, patch: ActorPatch) -> Result<Option<Actor>> {
    self
      .with_conn(move |conn| {
        let Some(current) = select_actor(conn, id)? else {
          return Ok(None);
        };
        let actor = patch.apply(current);
        conn.execute(
          "UPDATE actor SET name = ?1, surname = ?2 WHERE id = ?3",
          rusqlite::params![actor.name, actor.surname, id],
        )?;
        Ok(Some(actor))
      })
      .await
  }

  async fn delete_actor(&self, id: ActorId) -> Result<bool> {
    self
      .with_conn(move |conn| {
        let deleted = conn.execute("DELETE FROM actor WHERE id = ?1", rusqlite::params![id])?;
        Ok(deleted > 0)
      })
      .await
  }

  async fn delete_all_actors(&self) -> Result<usize> {
    self
      .with_conn(|conn| Ok(conn.execute("DELETE FROM actor", [])?))
      .await
  }

  // ── Associations ──────────────────────────────────────────────────────────

  async fn movie_actors(&self, movie_id: MovieId) -> Result<Vec<Actor>> {
    self
      .with_conn(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT actor.id, actor.name, actor.surname
           FROM actor
           JOIN movie_actor_through ON actor.id = movie_actor_through.actor_id
           WHERE movie_actor_through.movie_id = ?1",
        )?;
        let actors = stmt
          .query_map(rusqlite::params![movie_id], rows::actor)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(actors)
      })
      .await
  }
}

// ─── Single-row lookups ──────────────────────────────────────────────────────

fn select_movie(conn: &rusqlite::Connection, id: MovieId) -> rusqlite::Result<Option<Movie>> {
  conn
    .query_row(
      &format!("SELECT {MOVIE_COLUMNS} FROM movie WHERE id = ?1"),
      rusqlite::params![id],
      rows::movie,
    )
    .optional()
}

fn select_actor(conn: &rusqlite::Connection, id: ActorId) -> rusqlite::Result<Option<Actor>> {
  conn
    .query_row(
      &format!("SELECT {ACTOR_COLUMNS} FROM actor WHERE id = ?1"),
      rusqlite::params![id],
      rows::actor,
    )
    .optional()
}
