//! JSON shapes written to the wire.
//!
//! Record keys carry a trailing `": "` (`"id: "`, `"title: "`, …). Existing
//! clients parse those exact keys, so they are kept verbatim. Message
//! payloads use plain keys.

use marquee_core::{actor::Actor, movie::Movie};
use serde::Serialize;

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
  #[serde(rename = "id: ")]
  pub id:          i64,
  #[serde(rename = "title: ")]
  pub title:       String,
  #[serde(rename = "year: ")]
  pub year:        i64,
  #[serde(rename = "director: ")]
  pub director:    String,
  #[serde(rename = "description: ")]
  pub description: String,
}

impl From<Movie> for MovieRecord {
  fn from(m: Movie) -> Self {
    Self {
      id:          m.id,
      title:       m.title,
      year:        m.year,
      director:    m.director,
      description: m.description,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorRecord {
  #[serde(rename = "id: ")]
  pub id:      i64,
  #[serde(rename = "name: ")]
  pub name:    String,
  #[serde(rename = "surname: ")]
  pub surname: String,
}

impl From<Actor> for ActorRecord {
  fn from(a: Actor) -> Self {
    Self { id: a.id, name: a.name, surname: a.surname }
  }
}

// ─── Messages ────────────────────────────────────────────────────────────────

/// `{"message": "..."}`, optionally with the id of a freshly created row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id:      Option<i64>,
}

impl Message {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into(), id: None }
  }

  pub fn created(message: impl Into<String>, id: i64) -> Self {
    Self { message: message.into(), id: Some(id) }
  }
}

/// Either the requested data or a `200` message explaining its absence.
///
/// Callers tell the two apart by payload shape, not status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
  Found(T),
  Message(Message),
}

impl<T> From<Message> for Reply<T> {
  fn from(m: Message) -> Self {
    Reply::Message(m)
  }
}
