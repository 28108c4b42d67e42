//! Error types for the cloud sync crate.

use thiserror::Error;

/// Result type alias for cloud sync operations.
pub type Result<T> = std::result::Result<T, CloudSyncError>;

/// Errors that can occur talking to the sync endpoints. Callers treat any
/// of these as "stay on local state"; nothing here is fatal.
#[derive(Debug, Error)]
pub enum CloudSyncError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the server
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The session is not authenticated; no request was made.
    #[error("not authenticated")]
    Unauthenticated,
}

impl CloudSyncError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

impl From<CloudSyncError> for lifeplan_core::Error {
    fn from(err: CloudSyncError) -> Self {
        lifeplan_core::Error::Remote(err.to_string())
    }
}
