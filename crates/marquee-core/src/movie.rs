//! Movie records and the request shapes that create or change them.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Field, lenient_int},
};

/// Store-assigned movie identifier. Never reused after deletion.
pub type MovieId = i64;

/// A persisted movie row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub id:          MovieId,
  pub title:       String,
  pub year:        i64,
  pub director:    String,
  pub description: String,
}

/// A fully-validated movie awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
  pub title:       String,
  pub year:        i64,
  pub director:    String,
  pub description: String,
}

/// Request body for both `POST /movies` and `PUT /movies/{id}`.
///
/// Every key is optional on the wire; creation requires all four to be
/// present and non-blank, updates overlay whatever is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePatch {
  #[serde(default)]
  pub title:       Field<String>,
  #[serde(default, deserialize_with = "lenient_int")]
  pub year:        Field<i64>,
  #[serde(default)]
  pub director:    Field<String>,
  #[serde(default)]
  pub description: Field<String>,
}

impl MoviePatch {
  /// Validate for insertion. Fails with [`Error::MissingFields`] if any field
  /// is absent, `null`, empty, or zero.
  pub fn into_new(self) -> Result<NewMovie> {
    match (
      self.title.required(),
      self.year.required(),
      self.director.required(),
      self.description.required(),
    ) {
      (Some(title), Some(year), Some(director), Some(description)) => Ok(NewMovie {
        title,
        year,
        director,
        description,
      }),
      _ => Err(Error::MissingFields),
    }
  }

  /// Overlay this patch on `current`. The id never changes.
  pub fn apply(self, current: Movie) -> Movie {
    Movie {
      id:          current.id,
      title:       self.title.or_keep(current.title),
      year:        self.year.or_keep(current.year),
      director:    self.director.or_keep(current.director),
      description: self.description.or_keep(current.description),
    }
  }
}

impl NewMovie {
  pub fn with_id(self, id: MovieId) -> Movie {
    Movie {
      id,
      title: self.title,
      year: self.year,
      director: self.director,
      description: self.description,
    }
  }
}
