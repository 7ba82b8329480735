//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

/// Default endpoint the process posts to.
pub const DEFAULT_ENDPOINT_URL: &str = "https://test.url.com";

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Infrastructure values loaded from the env file / environment.
    pub infrastructure: InfrastructureConfig,

    /// Target of the POST.
    pub endpoint: EndpointConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Infrastructure values. Informational only; they do not change request behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct InfrastructureConfig {
    /// Deployment name, set from `CONFIG_NAME`.
    pub config_name: String,
}

/// Endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Absolute URL of the endpoint (e.g., "https://test.url.com").
    pub url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
