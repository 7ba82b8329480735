//! Error types for the transport and the process orchestrator.

use thiserror::Error;

/// Errors raised by an [`HttpClient`](crate::http::HttpClient) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The target URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or the response could not be received.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Low-level I/O failure, typically while reading a body stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by [`Service::start_process`](crate::service::Service::start_process).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The POST could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// The server answered with anything other than `201 Created`.
    #[error("unexpected status code from server")]
    UnexpectedStatus { status: u16 },

    /// The response body stream failed mid-read.
    #[error("Failed to read response body: {0}")]
    Read(#[source] TransportError),
}

/// Result type for orchestrator operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
