//! SQL schema for the Marquee SQLite store.
//!
//! Table and column names match the `movies-extended.db` layout, so an
//! existing database file is used as-is.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS movie (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    year        INTEGER NOT NULL,
    director    TEXT    NOT NULL,
    description TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS actor (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    surname TEXT NOT NULL
);

-- Links are read-only over HTTP. Deleting a movie or an actor leaves its link
-- rows in place.
CREATE TABLE IF NOT EXISTS movie_actor_through (
    movie_id INTEGER NOT NULL REFERENCES movie(id),
    actor_id INTEGER NOT NULL REFERENCES actor(id),
    PRIMARY KEY (movie_id, actor_id)
);

CREATE INDEX IF NOT EXISTS movie_actor_through_actor_idx ON movie_actor_through(actor_id);
";

/// Applied on every freshly opened connection. The bundled SQLite build
/// enforces foreign keys by default; links must never block a delete.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = OFF;";
