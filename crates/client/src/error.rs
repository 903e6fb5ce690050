//! Client-side failures.
//!
//! Every variant is a `NetworkFailure` from the view's point of view: the
//! view shows it inline and waits for a manual retry.

/// Failure to obtain a dataset from the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Server unreachable or the connection dropped.
    #[error("cannot reach {url}: {message}")]
    Request { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("{url} returned {status}{}", detail_suffix(.detail))]
    Status {
        url: String,
        status: u16,
        /// `error` field of the server's JSON error body, when present.
        detail: Option<String>,
    },

    /// Body was not the expected JSON array.
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ClientError {
    /// HTTP status, for `Status` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
