//! Server configuration.
//!
//! Layered with the `config` crate: built-in defaults, then the optional
//! TOML file, then `MARQUEE_*` environment variables. Nested keys use a
//! double underscore, e.g. `MARQUEE_GEOCODER__BASE_URL`.
//!
//! ```toml
//! host          = "0.0.0.0"
//! port          = 8000
//! database_path = "~/movies-extended.db"
//!
//! [geocoder]
//! base_url     = "https://nominatim.openstreetmap.org"
//! user_agent   = "Mozilla/5.0"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use marquee_api::GeocoderConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  pub geocoder:      GeocoderConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8000,
      database_path: PathBuf::from("movies-extended.db"),
      geocoder:      GeocoderConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::layered(config::File::from(path).required(false))
  }

  fn layered<F>(file: F) -> anyhow::Result<Self>
  where
    F: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .add_source(file)
      .add_source(
        config::Environment::with_prefix("MARQUEE")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  /// The database path with a leading `~` expanded.
  pub fn database_path(&self) -> PathBuf {
    expand_tilde(&self.database_path)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
