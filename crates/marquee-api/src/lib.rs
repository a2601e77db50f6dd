//! JSON REST API for the Marquee movie catalog.
//!
//! Exposes an axum [`Router`] backed by any
//! [`marquee_core::store::CatalogStore`], plus the greeting, sum and
//! reverse-geocoding utility routes. Transport concerns (binding, tracing
//! layers) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = marquee_api::api_router(Arc::new(store), geocoder);
//! axum::serve(listener, app).await?;
//! ```

pub mod actors;
pub mod body;
pub mod error;
pub mod geocode;
pub mod misc;
pub mod movies;
pub mod wire;

use std::sync::Arc;

use axum::{Router, routing::get};
use marquee_core::store::CatalogStore;

pub use error::ApiError;
pub use geocode::{Geocoder, GeocoderConfig};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store:    Arc<S>,
  pub geocoder: Arc<Geocoder>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), geocoder: Arc::clone(&self.geocoder) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
pub fn api_router<S>(store: Arc<S>, geocoder: Geocoder) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    // Utilities
    .route("/",             get(misc::root))
    .route("/hello/{name}", get(misc::hello))
    .route("/sum",          get(misc::sum))
    .route("/geocode",      get(geocode::handler::<S>))
    // Movies
    .route(
      "/movies",
      get(movies::list::<S>)
        .post(movies::create::<S>)
        .delete(movies::delete_all::<S>),
    )
    .route(
      "/movies/{movie_id}",
      get(movies::get_one::<S>)
        .put(movies::update::<S>)
        .delete(movies::delete_one::<S>),
    )
    .route("/movies/{movie_id}/actors", get(movies::actors::<S>))
    // Actors
    .route(
      "/actors",
      get(actors::list::<S>)
        .post(actors::create::<S>)
        .delete(actors::delete_all::<S>),
    )
    .route(
      "/actors/{actor_id}",
      get(actors::get_one::<S>)
        .put(actors::update::<S>)
        .delete(actors::delete_one::<S>),
    )
    .with_state(ApiState { store, geocoder: Arc::new(geocoder) })
}

#[cfg(test)]
mod tests;
