//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.
//!
//! # Routes
//!
//! - `GET /` - Liveness marker
//! - `GET /health` - Health check
//! - `GET /api/cities`, `/api/sales`, `/api/stock-prices`, `/api/population`
//! - `GET /api/datasets` - Dataset catalogue

use axum::Router;
use axum::routing::get;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use data::{DEFAULT_MAX_FILE_BYTES, DataStore};

use crate::routes::{data as data_routes, health};
use crate::state::ServerState;

/// Create the Axum application with all routes.
pub fn create_app(state: ServerState) -> Router {
    // Any origin may read: local development posture
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Liveness
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Datasets
        .route("/api/cities", get(data_routes::get_cities))
        .route("/api/sales", get(data_routes::get_sales))
        .route("/api/stock-prices", get(data_routes::get_stock_prices))
        .route("/api/population", get(data_routes::get_population))
        .route("/api/datasets", get(data_routes::get_datasets))
        .fallback(health::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
    /// Directory holding the CSV fixtures.
    pub data_dir: PathBuf,
    /// Largest data file the server will read.
    pub max_file_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            host: "0.0.0.0".into(),
            data_dir: PathBuf::from("data"),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads `VIZORA_HOST`, `VIZORA_PORT`, `VIZORA_DATA_DIR` and
    /// `VIZORA_MAX_FILE_MB`; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("VIZORA_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("VIZORA_HOST").unwrap_or(defaults.host);

        let data_dir = std::env::var("VIZORA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let max_file_bytes = std::env::var("VIZORA_MAX_FILE_MB")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(defaults.max_file_bytes);

        Self {
            port,
            host,
            data_dir,
            max_file_bytes,
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the data store described by this config.
    pub fn store(&self) -> DataStore {
        DataStore::new(&self.data_dir).max_file_bytes(self.max_file_bytes)
    }
}

/// Bind a listener for `config`.
pub async fn bind(config: &ServerConfig) -> io::Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        data_dir = %config.data_dir.display(),
        "data server listening"
    );
    Ok(listener)
}

/// Serve the app on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, state: ServerState) -> io::Result<()> {
    axum::serve(listener, create_app(state)).await
}
