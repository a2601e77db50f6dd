//! [`Field`] — a request value that remembers whether it was sent at all.
//!
//! JSON bodies distinguish three cases per key: the key is missing, the key
//! is present with `null`, or the key carries a value. Partial updates and
//! create validation both need to tell these apart, which `Option<T>` alone
//! cannot do.
//!
//! Use it on a struct field together with `#[serde(default)]` so a missing
//! key deserializes to [`Field::Absent`]:
//!
//! ```
//! use marquee_core::Field;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Body {
//!   #[serde(default)]
//!   title: Field<String>,
//! }
//!
//! let body: Body = serde_json::from_str("{}").unwrap();
//! assert_eq!(body.title, Field::Absent);
//! ```

use serde::{Deserialize, Deserializer, de};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
  /// The key was not sent.
  Absent,
  /// The key was sent with an explicit `null`.
  Null,
  /// The key was sent with a value.
  Present(T),
}

impl<T> Default for Field<T> {
  fn default() -> Self {
    Field::Absent
  }
}

impl<T> Field<T> {
  /// The carried value, if any. `Absent` and `Null` both yield `None`.
  pub fn present(self) -> Option<T> {
    match self {
      Field::Present(v) => Some(v),
      Field::Absent | Field::Null => None,
    }
  }

  /// The carried value, or `current` when nothing usable was sent.
  ///
  /// Required columns never accept `null`, so an explicit `null` keeps the
  /// stored value exactly like an omitted key does.
  pub fn or_keep(self, current: T) -> T {
    self.present().unwrap_or(current)
  }
}

impl<T: Blank> Field<T> {
  /// The carried value if it is present and not blank.
  pub fn required(self) -> Option<T> {
    self.present().filter(|v| !v.is_blank())
  }
}

impl<T> From<Option<T>> for Field<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => Field::Present(v),
      None => Field::Null,
    }
  }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<T>::deserialize(deserializer).map(Field::from)
  }
}

/// `deserialize_with` helper for integer fields that keeps the loose typing
/// of a plain JSON field map: integral floats (`2021.0`) and numeric strings
/// (`"2021"`) are accepted as integers, and an empty string reads as `null`.
///
/// Anything else that is not an integer is a deserialization error.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Field<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
  }

  let Some(loose) = Option::<Loose>::deserialize(deserializer)? else {
    return Ok(Field::Null);
  };
  let value = match loose {
    Loose::Int(n) => n,
    Loose::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
      f as i64
    }
    Loose::Float(f) => return Err(de::Error::custom(format!("expected an integer, got {f}"))),
    Loose::Text(s) if s.trim().is_empty() => return Ok(Field::Null),
    Loose::Text(s) => s
      .trim()
      .parse()
      .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}")))?,
  };
  Ok(Field::Present(value))
}

// ─── Blank ───────────────────────────────────────────────────────────────────

/// Values that count as "not provided" even when sent: the empty string and
/// zero.
pub trait Blank {
  fn is_blank(&self) -> bool;
}

impl Blank for String {
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl Blank for i64 {
  fn is_blank(&self) -> bool {
    *self == 0
  }
}
