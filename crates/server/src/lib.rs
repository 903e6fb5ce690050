//! Server crate: Axum-based JSON data service for the Vizora dashboard.
//!
//! Serves the four CSV fixtures as read-only JSON collections. Every request
//! re-reads its file; there is no cache and no shared mutable state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   GET /api/...   ┌───────────────┐   read   ┌───────────┐
//! │  Dashboard   │ ───────────────> │  Axum Router  │ ───────> │ CSV files │
//! │  (client)    │ <─────────────── │  (handlers)   │ <─────── │ (data/)   │
//! └──────────────┘    JSON array    └───────────────┘  records └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Router builder, `ServerConfig`, bind/serve helpers
//! - [`state`]: Shared server state (data store, start time)
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, data)
//!
//! # Endpoints
//!
//! - `GET /` - Liveness marker
//! - `GET /health` - Health with version and uptime
//! - `GET /api/cities` - Array of `City`
//! - `GET /api/sales` - Array of `SalesRecord`
//! - `GET /api/stock-prices` - Array of `StockPrice`
//! - `GET /api/population` - Array of `PopulationRecord`
//! - `GET /api/datasets` - Metadata for every dataset

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{ServerConfig, bind, create_app, serve};
pub use error::{AppError, AppResult};
pub use state::ServerState;
