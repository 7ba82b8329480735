//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint is an absolute http(s) URL
//! - Check the log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use url::Url;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEndpointUrl { url: String, reason: String },
    UnsupportedScheme(String),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidEndpointUrl { url, reason } => {
                write!(f, "endpoint.url '{}' is invalid: {}", url, reason)
            }
            ValidationError::UnsupportedScheme(scheme) => {
                write!(f, "endpoint.url scheme '{}' is not http or https", scheme)
            }
            ValidationError::InvalidLogLevel(level) => {
                write!(f, "observability.log_level '{}' is not one of {:?}", level, LOG_LEVELS)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a loaded configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            } else if url.host_str().map_or(true, str::is_empty) {
                errors.push(ValidationError::InvalidEndpointUrl {
                    url: config.endpoint.url.clone(),
                    reason: "missing host".to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidEndpointUrl {
            url: config.endpoint.url.clone(),
            reason: e.to_string(),
        }),
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
