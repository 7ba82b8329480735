//! `reqwest` adapter for [`HttpClient`].
//!
//! # Responsibilities
//! - Execute GET/POST through one shared connection pool
//! - Release idle connections on shutdown without making the client unusable
//!
//! # Design Decisions
//! - The pool lives behind an `ArcSwapOption`; shutdown swaps it out and the
//!   next request builds a fresh one
//! - In-flight requests hold their own `Arc` to the pool they started on

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Response};
use url::Url;

use crate::error::TransportError;
use crate::http::client::{HttpClient, HttpResponse, ResponseBody};

type BuilderFn = dyn Fn() -> ClientBuilder + Send + Sync;

/// Production [`HttpClient`] backed by `reqwest`.
pub struct ReqwestClient {
    client: ArcSwapOption<Client>,
    builder: Arc<BuilderFn>,
}

impl ReqwestClient {
    /// Create a client using `reqwest` defaults.
    pub fn new() -> Self {
        Self::with_builder(Client::builder)
    }

    /// Create a client whose pool is built from `builder` (initially and after
    /// every [`shutdown`](HttpClient::shutdown)).
    pub fn with_builder<F>(builder: F) -> Self
    where
        F: Fn() -> ClientBuilder + Send + Sync + 'static,
    {
        Self {
            client: ArcSwapOption::empty(),
            builder: Arc::new(builder),
        }
    }

    /// Whether a connection pool is currently held.
    pub fn has_pool(&self) -> bool {
        self.client.load().is_some()
    }

    fn client(&self) -> Result<Arc<Client>, TransportError> {
        if let Some(client) = self.client.load_full() {
            return Ok(client);
        }

        let client = Arc::new((self.builder)().build()?);
        self.client.store(Some(client.clone()));
        tracing::debug!("HTTP connection pool created");
        Ok(client)
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_url(url: &str) -> Result<Url, TransportError> {
    Url::parse(url).map_err(|source| TransportError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let url = parse_url(url)?;
        let client = self.client()?;

        let response = client.get(url).send().await?;
        Ok(HttpResponse::new(response.status(), ReqwestBody::new(response)))
    }

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        let url = parse_url(url)?;
        let client = self.client()?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        Ok(HttpResponse::new(response.status(), ReqwestBody::new(response)))
    }

    fn shutdown(&self) {
        if self.client.swap(None).is_some() {
            tracing::debug!("Released idle HTTP connections");
        }
    }
}

/// Body stream of a `reqwest` response; dropping it closes the stream.
struct ReqwestBody {
    response: Option<Response>,
}

impl ReqwestBody {
    fn new(response: Response) -> Self {
        Self {
            response: Some(response),
        }
    }
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_to_end(&mut self) -> Result<Vec<u8>, TransportError> {
        match self.response.take() {
            Some(response) => Ok(response.bytes().await?.to_vec()),
            None => Ok(Vec::new()),
        }
    }
}
