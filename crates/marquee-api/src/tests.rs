//! Router-level tests: requests go through the full axum stack into a
//! file-backed `SqliteStore`.

use std::{collections::HashMap, sync::Arc};

use axum::{
  Json, Router,
  body::Body,
  extract::Query,
  http::{HeaderMap, Request, StatusCode, header},
  routing::get,
};
use marquee_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;

use crate::{Geocoder, GeocoderConfig, api_router};

struct TestApp {
  _dir:   TempDir,
  store:  SqliteStore,
  router: Router,
}

async fn app_with_geocoder(config: GeocoderConfig) -> TestApp {
  let dir = TempDir::new().unwrap();
  let store = SqliteStore::open(dir.path().join("movies.db")).await.unwrap();
  let geocoder = Geocoder::new(&config).unwrap();
  let router = api_router(Arc::new(store.clone()), geocoder);
  TestApp { _dir: dir, store, router }
}

async fn app() -> TestApp {
  app_with_geocoder(GeocoderConfig::default()).await
}

impl TestApp {
  async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    let resp = self.router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
  }

  async fn get(&self, uri: &str) -> Value {
    let (status, body) = self.call("GET", uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}: {body}");
    body
  }

  async fn send(&self, method: &str, uri: &str, body: Value) -> Value {
    let (status, reply) = self.call(method, uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{method} {uri}: {reply}");
    reply
  }

  async fn delete(&self, uri: &str) -> Value {
    let (status, body) = self.call("DELETE", uri, None).await;
    assert_eq!(status, StatusCode::OK, "DELETE {uri}: {body}");
    body
  }
}

fn dune() -> Value {
  json!({
    "title": "Dune",
    "year": 2021,
    "director": "Villeneuve",
    "description": "...",
  })
}

// ─── Utilities ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_and_hello_greet() {
  let app = app().await;
  assert_eq!(app.get("/").await, json!({"message": "Hello World"}));
  assert_eq!(app.get("/hello/Ada").await, json!({"message": "Hello Ada"}));
}

#[tokio::test]
async fn sum_uses_defaults() {
  let app = app().await;
  assert_eq!(app.get("/sum").await, json!(10));
  assert_eq!(app.get("/sum?x=5").await, json!(15));
  assert_eq!(app.get("/sum?y=-4").await, json!(-4));
  assert_eq!(app.get("/sum?x=2&y=3").await, json!(5));
}

#[tokio::test]
async fn sum_overflow_is_bad_request() {
  let app = app().await;
  let (status, body) = app.call("GET", &format!("/sum?x={}&y=1", i64::MAX), None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("overflows"), "{body}");
}

// ─── Movies ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_movie() {
  let app = app().await;

  let created = app.send("POST", "/movies", dune()).await;
  assert_eq!(created, json!({"message": "Movie added successfully", "id": 1}));

  let fetched = app.get("/movies/1").await;
  assert_eq!(
    fetched,
    json!({
      "id: ": 1,
      "title: ": "Dune",
      "year: ": 2021,
      "director: ": "Villeneuve",
      "description: ": "...",
    })
  );
}

#[tokio::test]
async fn list_movies_starts_empty() {
  let app = app().await;
  assert_eq!(app.get("/movies").await, json!([]));

  app.send("POST", "/movies", dune()).await;
  let list = app.get("/movies").await;
  assert_eq!(list.as_array().unwrap().len(), 1);
  assert_eq!(list[0]["title: "], "Dune");
}

#[tokio::test]
async fn get_unknown_movie_is_a_message() {
  let app = app().await;
  assert_eq!(app.get("/movies/77").await, json!({"message": "Movie not found"}));
}

#[tokio::test]
async fn create_rejects_missing_or_falsy_fields_without_writing() {
  let app = app().await;
  let bodies = [
    json!({"title": "Dune", "year": 2021, "director": "Villeneuve"}),
    json!({"title": "", "year": 2021, "director": "Villeneuve", "description": "..."}),
    json!({"title": "Dune", "year": 0, "director": "Villeneuve", "description": "..."}),
    json!({"title": "Dune", "year": 2021, "director": null, "description": "..."}),
    json!({}),
  ];
  for body in bodies {
    let reply = app.send("POST", "/movies", body.clone()).await;
    assert_eq!(reply, json!({"message": "Missing required fields"}), "{body}");
  }
  assert_eq!(app.get("/movies").await, json!([]));
}

#[tokio::test]
async fn year_may_be_sent_as_a_string_or_integral_float() {
  let app = app().await;
  let mut body = dune();
  body["year"] = json!("2021");
  app.send("POST", "/movies", body).await;
  let mut body = dune();
  body["year"] = json!(2016.0);
  app.send("POST", "/movies", body).await;

  assert_eq!(app.get("/movies/1").await["year: "], 2021);
  assert_eq!(app.get("/movies/2").await["year: "], 2016);

  app.send("PUT", "/movies/1", json!({"year": "2024"})).await;
  assert_eq!(app.get("/movies/1").await["year: "], 2024);
}

#[tokio::test]
async fn unparseable_body_is_a_400_with_error_body() {
  let app = app().await;
  let mut body = dune();
  body["year"] = json!("next spring");

  for (method, uri) in [("POST", "/movies"), ("PUT", "/movies/1")] {
    let (status, reply) = app.call(method, uri, Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
    assert!(reply["error"].as_str().unwrap().starts_with("bad request"), "{reply}");
  }
  assert_eq!(app.get("/movies").await, json!([]));
}

#[tokio::test]
async fn partial_update_overlays_sent_fields() {
  let app = app().await;
  app.send("POST", "/movies", dune()).await;

  let reply = app
    .send("PUT", "/movies/1", json!({"title": "Dune: Part One", "description": null}))
    .await;
  assert_eq!(reply, json!({"message": "Movie 1 updated successfully"}));

  let fetched = app.get("/movies/1").await;
  assert_eq!(fetched["title: "], "Dune: Part One");
  assert_eq!(fetched["year: "], 2021);
  assert_eq!(fetched["director: "], "Villeneuve");
  assert_eq!(fetched["description: "], "...");
}

#[tokio::test]
async fn update_unknown_movie_keeps_trailing_period() {
  let app = app().await;
  let reply = app.send("PUT", "/movies/3", json!({"title": "Ghost"})).await;
  assert_eq!(reply, json!({"message": "Movie not found."}));
}

#[tokio::test]
async fn delete_movie_then_get_reports_not_found() {
  let app = app().await;
  app.send("POST", "/movies", dune()).await;

  assert_eq!(
    app.delete("/movies/1").await,
    json!({"message": "Movie 1 deleted successfully"})
  );
  assert_eq!(app.get("/movies/1").await, json!({"message": "Movie not found"}));
  assert_eq!(app.delete("/movies/1").await, json!({"message": "Movie not found."}));
}

#[tokio::test]
async fn delete_all_movies_reports_count() {
  let app = app().await;
  app.send("POST", "/movies", dune()).await;
  app.send("POST", "/movies", dune()).await;

  assert_eq!(app.delete("/movies").await, json!({"message": "2 movies have been deleted"}));
  assert_eq!(app.get("/movies").await, json!([]));
  assert_eq!(app.delete("/movies").await, json!({"message": "0 movies have been deleted"}));
}

#[tokio::test]
async fn non_integer_movie_id_is_rejected() {
  let app = app().await;
  let (status, _) = app.call("GET", "/movies/dune", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Actors ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn actor_crud_round() {
  let app = app().await;

  let created = app
    .send("POST", "/actors", json!({"name": "Zendaya", "surname": "Coleman"}))
    .await;
  assert_eq!(created, json!({"message": "Actor added successfully", "id": 1}));

  assert_eq!(
    app.get("/actors").await,
    json!([{"id: ": 1, "name: ": "Zendaya", "surname: ": "Coleman"}])
  );

  let reply = app.send("PUT", "/actors/1", json!({"surname": "Stoermer Coleman"})).await;
  assert_eq!(reply, json!({"message": "Actor 1 updated successfully"}));
  assert_eq!(
    app.get("/actors/1").await,
    json!({"id: ": 1, "name: ": "Zendaya", "surname: ": "Stoermer Coleman"})
  );

  assert_eq!(
    app.delete("/actors/1").await,
    json!({"message": "Actor 1 deleted successfully"})
  );
  assert_eq!(app.get("/actors/1").await, json!({"message": "Actor not found"}));
  assert_eq!(app.delete("/actors/1").await, json!({"message": "Actor not found."}));
  assert_eq!(
    app.send("PUT", "/actors/1", json!({"name": "Z"})).await,
    json!({"message": "Actor not found."})
  );
}

#[tokio::test]
async fn create_actor_requires_both_names() {
  let app = app().await;
  let reply = app.send("POST", "/actors", json!({"name": "Zendaya"})).await;
  assert_eq!(reply, json!({"message": "Missing required fields"}));
  assert_eq!(app.get("/actors").await, json!([]));
}

#[tokio::test]
async fn delete_all_actors_keeps_singular_wording() {
  let app = app().await;
  for name in ["Oscar", "Josh", "Stellan"] {
    app.send("POST", "/actors", json!({"name": name, "surname": "X"})).await;
  }
  assert_eq!(app.delete("/actors").await, json!({"message": "3 actor have been deleted"}));
}

// ─── Associations ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn movie_actors_lists_linked_cast() {
  let app = app().await;
  app.send("POST", "/movies", dune()).await;
  app.send("POST", "/actors", json!({"name": "Timothée", "surname": "Chalamet"})).await;
  app.store.link_actor(1, 1).await.unwrap();

  assert_eq!(
    app.get("/movies/1/actors").await,
    json!([{"id: ": 1, "name: ": "Timothée", "surname: ": "Chalamet"}])
  );
}

#[tokio::test]
async fn movie_actors_cannot_tell_empty_cast_from_unknown_movie() {
  let app = app().await;
  app.send("POST", "/movies", dune()).await;

  let not_found = json!({"message": "Actor not found"});
  assert_eq!(app.get("/movies/1/actors").await, not_found);
  assert_eq!(app.get("/movies/404/actors").await, not_found);
}

// ─── Failures ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn store_failure_is_a_500_with_error_body() {
  let TestApp { _dir: dir, router, .. } = app().await;
  drop(dir);

  let req = Request::builder().uri("/movies").body(Body::empty()).unwrap();
  let resp = router.oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let body: Value = serde_json::from_slice(&bytes).unwrap();
  assert!(body["error"].as_str().unwrap().starts_with("store error"), "{body}");
}

// ─── Geocode ──────────────────────────────────────────────────────────────────

/// Serve a fake `/reverse` that echoes the query string and user agent.
async fn spawn_upstream() -> String {
  let upstream = Router::new().route(
    "/reverse",
    get(|Query(query): Query<HashMap<String, String>>, headers: HeaderMap| async move {
      let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
      Json(json!({"query": query, "user_agent": agent, "display_name": "Berlin"}))
    }),
  );
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move { axum::serve(listener, upstream).await.unwrap() });
  format!("http://{addr}")
}

#[tokio::test]
async fn geocode_relays_upstream_body() {
  let base_url = spawn_upstream().await;
  let app = app_with_geocoder(GeocoderConfig { base_url, ..GeocoderConfig::default() }).await;

  let body = app.get("/geocode?lat=52.5&lon=13.4").await;
  assert_eq!(body["display_name"], "Berlin");
  assert_eq!(body["user_agent"], "Mozilla/5.0");
  assert_eq!(body["query"]["format"], "jsonv2");
  assert_eq!(body["query"]["lat"], "52.5");
  assert_eq!(body["query"]["lon"], "13.4");
}

#[tokio::test]
async fn geocode_requires_both_coordinates() {
  let app = app().await;
  let (status, _) = app.call("GET", "/geocode?lat=52.5", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_json_geocoder_reply_is_a_bad_gateway() {
  let upstream = Router::new().route("/reverse", get(|| async { "<html>rate limited</html>" }));
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move { axum::serve(listener, upstream).await.unwrap() });

  let config = GeocoderConfig { base_url: format!("http://{addr}"), ..GeocoderConfig::default() };
  let app = app_with_geocoder(config).await;

  let (status, body) = app.call("GET", "/geocode?lat=0&lon=0", None).await;
  assert_eq!(status, StatusCode::BAD_GATEWAY);
  assert!(body["error"].as_str().unwrap().starts_with("geocoder error"), "{body}");
}

#[tokio::test]
async fn unreachable_geocoder_is_a_bad_gateway() {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let config = GeocoderConfig {
    base_url: format!("http://{addr}"),
    timeout_secs: Some(5),
    ..GeocoderConfig::default()
  };
  let app = app_with_geocoder(config).await;

  let (status, body) = app.call("GET", "/geocode?lat=0&lon=0", None).await;
  assert_eq!(status, StatusCode::BAD_GATEWAY);
  assert!(body["error"].as_str().unwrap().starts_with("geocoder error"), "{body}");
}
