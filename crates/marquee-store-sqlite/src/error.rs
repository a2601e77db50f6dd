//! Error type for `marquee-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot open database {path:?}: {source}")]
  Open {
    path:   PathBuf,
    #[source]
    source: tokio_rusqlite::Error,
  },

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
