//! marquee server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! catalog, and serves the JSON API over HTTP.
//!
//! To create the schema in a fresh database file without serving:
//!
//! ```sh
//! cargo run -p marquee-server -- --init-db
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use marquee_api::Geocoder;
use marquee_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Marquee movie catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Create the database schema and exit.
  #[arg(long)]
  init_db: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let database_path = server_cfg.database_path();
  let store = SqliteStore::open(&database_path)
    .await
    .with_context(|| format!("failed to open store at {database_path:?}"))?;

  if cli.init_db {
    tracing::info!(path = ?database_path, "schema initialised");
    return Ok(());
  }

  let geocoder = Geocoder::new(&server_cfg.geocoder).context("failed to build geocoder client")?;

  let app = marquee_api::api_router(Arc::new(store), geocoder).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
