//! Failure taxonomy for gateway calls.
//!
//! Every call resolves to the unwrapped payload or exactly one of these
//! kinds. The client performs no retries and no local recovery; policy for
//! specific codes (credential clears, not-found views) belongs to the
//! presentation layer, reached through [`Hooks`](super::hooks::Hooks).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

/// Server-declared error envelope, the `error` object of a response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Application error code. HTTP-like for 401/403/404/500; service
    /// codes (10002 bad data, 20117 insufficient balance, ...) otherwise.
    pub code: i64,
    /// Human-readable description supplied by the server.
    pub description: String,
    /// HTTP status the server attached to the envelope.
    pub status: u16,
}

/// Error returned by [`ApiClient`](super::client::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received: connect failure, timeout, or the body
    /// stream died mid-read. Independent of the request verb.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http transport: {0}")]
    Build(#[source] reqwest::Error),
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// A per-call header name or value was not representable.
    #[error("invalid header `{name}`")]
    InvalidHeader {
        /// Name of the offending header.
        name: String,
    },
    /// The transport produced a response with no body at all.
    #[error("empty response body (HTTP {status})")]
    EmptyResponse {
        /// HTTP status of the bodyless response.
        status: u16,
    },
    /// The body was present but did not parse to a usable envelope.
    #[error("invalid response data (HTTP {status}): {detail}")]
    InvalidData {
        /// HTTP status of the malformed response.
        status: u16,
        /// Short parser description of what was wrong.
        detail: String,
    },
    /// The server declared an application error in the envelope.
    #[error("server error {}: {}", .0.code, .0.description)]
    Server(ErrorBody),
    /// The durable session store failed while persisting credentials.
    #[error("session store error: {0}")]
    Store(#[from] crate::session::StoreError),
}

impl ApiError {
    /// The server-declared envelope, when this is a [`ApiError::Server`].
    #[must_use]
    pub fn server_error(&self) -> Option<&ErrorBody> {
        match self {
            Self::Server(body) => Some(body),
            _ => None,
        }
    }

    /// Whether this error came back from the transport without a response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
