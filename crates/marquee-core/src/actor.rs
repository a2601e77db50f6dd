//! Actor records and their request shapes.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, field::Field};

pub type ActorId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
  pub id:      ActorId,
  pub name:    String,
  pub surname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
  pub name:    String,
  pub surname: String,
}

/// Request body for `POST /actors` and `PUT /actors/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorPatch {
  #[serde(default)]
  pub name:    Field<String>,
  #[serde(default)]
  pub surname: Field<String>,
}

impl ActorPatch {
  pub fn into_new(self) -> Result<NewActor> {
    match (self.name.required(), self.surname.required()) {
      (Some(name), Some(surname)) => Ok(NewActor { name, surname }),
      _ => Err(Error::MissingFields),
    }
  }

  pub fn apply(self, current: Actor) -> Actor {
    Actor {
      id:      current.id,
      name:    self.name.or_keep(current.name),
      surname: self.surname.or_keep(current.surname),
    }
  }
}

impl NewActor {
  pub fn with_id(self, id: ActorId) -> Actor {
    Actor { id, name: self.name, surname: self.surname }
  }
}
