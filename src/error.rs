//! Error types for track-submission
//!
//! Parsing never fails with an error: a message that doesn't follow the
//! grammar is reported as a skip. Errors here come from configuration and
//! delivery.

use thiserror::Error;

/// Errors that can occur while tracking a submission
#[derive(Debug, Error)]
pub enum Error {
    /// The ingestion endpoint answered with a non-success status
    #[error("API error ({status}): {body}")]
    Delivery {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Transport-level failure (connection, TLS, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL is not usable
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Required configuration is missing
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of a delivery failure, if the endpoint answered at all
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Delivery { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
