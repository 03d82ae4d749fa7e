use reqwest::StatusCode;

/// Failure taxonomy for the dashboard API. Mandatory fetches surface these to
/// the orchestrator unchanged; the optional advice fetch maps `NotFound` to an
/// absent document at the call site.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response. `body` is truncated for logging.
    #[error("HTTP {status} from {url}")]
    Http {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// An optional single-resource endpoint had nothing to return.
    #[error("no {resource} found for user {user}")]
    NotFound { resource: &'static str, user: String },

    /// The response was 2xx but did not match the expected shape.
    #[error("failed to decode {resource} response")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
