//! Error types for the pod client.

use url::Url;

/// Errors that can occur talking to a pod.
#[derive(Debug, thiserror::Error)]
pub enum PodError {
    /// Transport-level failure before any response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Resource does not exist
    #[error("resource not found: {0}")]
    NotFound(Url),

    /// The session is not allowed to perform the operation
    #[error("not authorized for {0}")]
    Unauthorized(Url),

    /// Container still holds resources and cannot be deleted
    #[error("container not empty: {0}")]
    ContainerNotEmpty(Url),

    /// Remote store rejected the request
    #[error("HTTP status {status} for {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: Url,
        body: String,
    },

    /// Response body was not the expected shape
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Store accepted a file but did not report its assigned URL
    #[error("store did not assign a resource URL for '{slug}' in {container}")]
    MissingLocation { container: Url, slug: String },

    /// A URL built from a store response did not parse
    #[error("invalid resource URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for pod-client operations.
pub type Result<T> = std::result::Result<T, PodError>;
