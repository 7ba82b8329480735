//! Process orchestrator.
//!
//! # Responsibilities
//! - Encode the fixed request payload
//! - POST it to the configured endpoint
//! - Accept only `201 Created` and hand back the body as a string
//!
//! # Design Decisions
//! - Transport and encoder are injected, so the whole flow runs against doubles
//! - No retries: one best-effort round trip per call
//! - The response body is dropped on every exit path

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::http::{HttpClient, APPLICATION_JSON};
use crate::json::JsonHandler;

/// Payload posted by [`Service::start_process`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub key: String,
}

impl ProcessRequest {
    /// The payload sent on every run: `{"key":"value"}`.
    pub fn fixed() -> Self {
        Self {
            key: "value".to_string(),
        }
    }
}

#[async_trait]
pub trait Service: Send + Sync {
    /// Run one encode → POST → validate → read round trip.
    async fn start_process(&self) -> ServiceResult<String>;
}

/// [`Service`] over an injected transport and JSON encoder.
pub struct ProcessService<C, J> {
    http: Arc<C>,
    json: J,
    endpoint: String,
}

impl<C: HttpClient, J: JsonHandler> ProcessService<C, J> {
    pub fn new(http: Arc<C>, json: J, config: &ServiceConfig) -> Self {
        tracing::info!(
            config_name = %config.infrastructure.config_name,
            endpoint = %config.endpoint.url,
            "Process service created"
        );

        Self {
            http,
            json,
            endpoint: config.endpoint.url.clone(),
        }
    }
}

#[async_trait]
impl<C: HttpClient, J: JsonHandler> Service for ProcessService<C, J> {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn start_process(&self) -> ServiceResult<String> {
        let body = self
            .json
            .marshal(&ProcessRequest::fixed())
            .map_err(ServiceError::Encoding)?;

        let response = self
            .http
            .post(&self.endpoint, APPLICATION_JSON, body)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "POST failed");
                ServiceError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::CREATED {
            tracing::warn!(status = status.as_u16(), "Unexpected status code");
            return Err(ServiceError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ServiceError::Read)?;
        tracing::debug!(len = bytes.len(), "Response body read");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
