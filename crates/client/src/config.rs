//! Client configuration.

/// Default server base URL.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8002";

/// Where the data server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:8002`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl ClientConfig {
    /// Create a config for `base_url`. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create config from `VIZORA_SERVER_URL`, falling back to the default.
    pub fn from_env() -> Self {
        std::env::var("VIZORA_SERVER_URL")
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Absolute URL of `path` on the server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
