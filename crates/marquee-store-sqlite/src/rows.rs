//! Column lists and row mappers shared by the store's queries.

use marquee_core::{actor::Actor, movie::Movie};
use rusqlite::Row;

pub const MOVIE_COLUMNS: &str = "id, title, year, director, description";
pub const ACTOR_COLUMNS: &str = "id, name, surname";

/// Map a row selected with [`MOVIE_COLUMNS`].
pub fn movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
  Ok(Movie {
    id:          row.get(0)?,
    title:       row.get(1)?,
    year:        row.get(2)?,
    director:    row.get(3)?,
    description: row.get(4)?,
  })
}

/// Map a row selected with [`ACTOR_COLUMNS`].
pub fn actor(row: &Row<'_>) -> rusqlite::Result<Actor> {
  Ok(Actor {
    id:      row.get(0)?,
    name:    row.get(1)?,
    surname: row.get(2)?,
  })
}
