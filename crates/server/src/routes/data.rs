//! Dataset REST endpoints.
//!
//! Each endpoint takes no parameters and returns the whole dataset as a JSON
//! array in file order. A missing or malformed file fails the request with
//! `DataUnavailable`; there is no partial payload. File reads and parsing run
//! on the blocking pool.
//!
//! # Endpoints
//!
//! - `GET /api/cities` - Cities with coordinates and population
//! - `GET /api/sales` - Monthly sales by product
//! - `GET /api/stock-prices` - Daily OHLCV quotes
//! - `GET /api/population` - Yearly population and GDP per capita
//! - `GET /api/datasets` - Metadata for every dataset

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tokio::task;

use data::DatasetInfo;
use types::{City, PopulationRecord, Record, SalesRecord, StockPrice};

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Load every row of `R`'s dataset as a JSON array.
async fn load_all<R: Record>(state: &ServerState) -> AppResult<Json<Vec<R>>> {
    let store = Arc::clone(&state.store);
    let records = task::spawn_blocking(move || store.load::<R>())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    tracing::debug!(dataset = %R::DATASET, rows = records.len(), "serving dataset");
    Ok(Json(records))
}

/// Get cities: `GET /api/cities`
pub async fn get_cities(State(state): State<ServerState>) -> AppResult<Json<Vec<City>>> {
    load_all(&state).await
}

/// Get monthly sales: `GET /api/sales`
pub async fn get_sales(State(state): State<ServerState>) -> AppResult<Json<Vec<SalesRecord>>> {
    load_all(&state).await
}

/// Get stock prices: `GET /api/stock-prices`
pub async fn get_stock_prices(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<StockPrice>>> {
    load_all(&state).await
}

/// Get population history: `GET /api/population`
pub async fn get_population(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PopulationRecord>>> {
    load_all(&state).await
}

/// Get dataset catalogue: `GET /api/datasets`
///
/// Unavailable datasets are flagged per entry, never as a request failure.
pub async fn get_datasets(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DatasetInfo>>> {
    let store = Arc::clone(&state.store);
    let catalog = task::spawn_blocking(move || store.catalog())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(catalog))
}
