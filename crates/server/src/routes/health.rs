//! Liveness and health endpoints.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness marker (always 200 if the process is up)
//! - `GET /health` - Health with package version and uptime
//!
//! Also provides the JSON 404 fallback for unknown paths.

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use serde::Serialize;

use crate::error::AppError;
use crate::state::ServerState;

/// Liveness marker response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Server package version.
    pub version: &'static str,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
}

/// Liveness marker: `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Vizora Data API",
    })
}

/// Health check: `GET /health`
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
    })
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_marker() {
        let Json(body) = root().await;
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Vizora Data API"}"#);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            uptime_secs: 60,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"uptime_secs\":60"));
    }

    #[tokio::test]
    async fn test_not_found_carries_path() {
        let err = not_found(Uri::from_static("/api/unknown")).await;
        assert!(matches!(err, AppError::NotFound(ref p) if p == "/api/unknown"));
    }
}
