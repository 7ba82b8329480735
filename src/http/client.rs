//! Transport abstraction.
//!
//! # Responsibilities
//! - Define the HTTP capabilities the orchestrator needs (GET, POST, shutdown)
//! - Own the response body as a scoped resource
//!
//! # Design Decisions
//! - The body is released when the [`HttpResponse`] is dropped, so every exit
//!   path of a caller closes it exactly once
//! - Status and body are kept apart so a caller can reject a response without
//!   reading it

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::TransportError;

/// Outbound HTTP capabilities used by the process orchestrator.
///
/// [`ReqwestClient`](crate::http::ReqwestClient) is the production adapter; tests
/// substitute their own implementations.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Issue a POST request with the given `Content-Type` and byte body.
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError>;

    /// Release pooled idle connections.
    fn shutdown(&self);
}

/// A readable response body.
///
/// Implementations release their underlying stream on drop.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the remaining body to the end.
    async fn read_to_end(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// Status code plus an owned body stream.
pub struct HttpResponse {
    status: StatusCode,
    body: Box<dyn ResponseBody>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl ResponseBody + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Consume the response and read its whole body.
    ///
    /// The body stream is dropped before this returns, whether the read
    /// succeeded or not.
    pub async fn bytes(mut self) -> Result<Vec<u8>, TransportError> {
        self.body.read_to_end().await
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// In-memory body, mostly for fixtures.
#[derive(Debug, Clone, Default)]
pub struct FixedBody {
    data: Option<Vec<u8>>,
}

impl FixedBody {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }
}

#[async_trait]
impl ResponseBody for FixedBody {
    async fn read_to_end(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(self.data.take().unwrap_or_default())
    }
}
