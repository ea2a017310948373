// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for the registry submitter

use thiserror::Error;

/// Invalid rate limiter configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Rate limit must be at least 1")]
    ZeroLimit,

    #[error("Rate window must be longer than zero")]
    ZeroWindow,
}

/// Failure while building or sending a submission
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid registry endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Registry responded with status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors come from bad header names or values.
        if err.is_builder() {
            return TransportError::InvalidRequest(err.to_string());
        }
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(err.to_string()),
        }
    }
}
