//! Error types for `marquee-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A create request left at least one required field absent or blank.
  #[error("missing required fields")]
  MissingFields,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
