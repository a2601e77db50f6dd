//! Reverse-geocoding pass-through.
//!
//! `GET /geocode?lat=&lon=` forwards the coordinates to a Nominatim-style
//! `/reverse` endpoint and relays its JSON body untouched. There is no retry
//! and, unless configured, no timeout.

use std::time::Duration;

use axum::{
  Json,
  extract::{Query, State},
};
use marquee_core::store::CatalogStore;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiState, error::ApiError};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Upstream settings, deserialised from the `[geocoder]` config table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
  pub base_url:     String,
  pub user_agent:   String,
  pub timeout_secs: Option<u64>,
}

impl Default for GeocoderConfig {
  fn default() -> Self {
    Self {
      base_url:     "https://nominatim.openstreetmap.org".to_string(),
      user_agent:   "Mozilla/5.0".to_string(),
      timeout_secs: None,
    }
  }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the reverse-geocoding service.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone, Debug)]
pub struct Geocoder {
  client:   Client,
  base_url: String,
}

impl Geocoder {
  pub fn new(config: &GeocoderConfig) -> Result<Self, reqwest::Error> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(Self {
      client:   builder.build()?,
      base_url: config.base_url.trim_end_matches('/').to_string(),
    })
  }

  /// `GET {base_url}/reverse?format=jsonv2&lat=<lat>&lon=<lon>`
  ///
  /// The upstream status is not inspected; whatever JSON comes back is
  /// returned as-is.
  pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Value, reqwest::Error> {
    let resp = self
      .client
      .get(format!("{}/reverse", self.base_url))
      .query(&[
        ("format", "jsonv2".to_string()),
        ("lat", lat.to_string()),
        ("lon", lon.to_string()),
      ])
      .send()
      .await
      .inspect_err(|e| tracing::warn!(error = %e, "geocoder request failed"))?;

    tracing::debug!(status = %resp.status(), lat, lon, "geocoder replied");
    resp
      .json()
      .await
      .inspect_err(|e| tracing::warn!(error = %e, "geocoder reply was not JSON"))
  }
}

// ─── Handler ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
  pub lat: f64,
  pub lon: f64,
}

/// `GET /geocode?lat=<f64>&lon=<f64>`
pub async fn handler<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Query(params): Query<GeocodeParams>,
) -> Result<Json<Value>, ApiError> {
  let place = state.geocoder.reverse(params.lat, params.lon).await?;
  Ok(Json(place))
}
