//! API errors

use thiserror::Error;

/// Errors returned by [`StorefrontApi`](super::StorefrontApi) implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// Offending value
        url: String,

        /// Why it was rejected
        reason: String,
    },

    /// The request never produced a response.
    #[error("request to {path} failed: {source}")]
    Network {
        /// Request path
        path: String,

        /// Transport error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{method} {path} returned status {status}: {body}")]
    Status {
        /// Request method
        method: String,

        /// Request path
        path: String,

        /// HTTP status code
        status: u16,

        /// Response body, possibly empty
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response from {path}: {source}")]
    Decode {
        /// Request path
        path: String,

        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::InvalidBaseUrl { .. } | Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}
