//! HTTP access to the data server.
//!
//! One GET per dataset, no parameters, no timeout: a hung request simply
//! never resolves, and the view that issued it stays in `Loading`.

use serde::Deserialize;
use types::Record;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// JSON error body produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Liveness marker returned by `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct Liveness {
    pub message: String,
}

/// Typed client for the data server.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl DataClient {
    /// Create a client for the given server.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Server configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every row of `R`'s dataset.
    pub async fn fetch<R: Record>(&self) -> ClientResult<Vec<R>> {
        let url = self.config.url(R::DATASET.endpoint());
        let records: Vec<R> = self.get_json(url).await?;
        tracing::debug!(dataset = %R::DATASET, rows = records.len(), "fetched dataset");
        Ok(records)
    }

    /// Check that the server is reachable: `GET /`.
    pub async fn ping(&self) -> ClientResult<Liveness> {
        self.get_json(self.config.url("/")).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.json::<ErrorBody>().await.ok().map(|b| b.error);
            tracing::warn!(%url, status = status.as_u16(), "server returned failure status");
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<T>().await.map_err(|e| ClientError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
