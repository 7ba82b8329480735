//! Startup orchestration.
//!
//! # Responsibilities
//! - Merge configuration sources in precedence order
//! - Validate the merged configuration
//!
//! # Design Decisions
//! - Fail fast: an unreadable or invalid explicit config (`--config`, `--url`)
//!   is fatal
//! - The env file only carries informational values: a missing or malformed
//!   one leaves the defaults in place and is reported back to the caller, which
//!   logs it once the subscriber is installed

use std::path::PathBuf;

use crate::config::loader::{apply_env_overrides, load_config, load_env_file, ConfigError};
use crate::config::validation::validate_config;
use crate::config::ServiceConfig;

/// Default env file, read from the working directory.
pub const DEFAULT_ENV_FILE: &str = "app-dev.env";

/// Where startup looks for configuration.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// Optional TOML file with the full configuration.
    pub config_path: Option<PathBuf>,
    /// Environment-style file (`KEY=VALUE`).
    pub env_file: PathBuf,
    /// Endpoint override, applied last.
    pub url: Option<String>,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            url: None,
        }
    }
}

/// Outcome of reading the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded,
    Missing,
    /// The file could not be read or parsed; nothing from it was applied.
    Invalid(String),
}

/// Result of startup configuration.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: ServiceConfig,
    pub env_file: EnvFileStatus,
}

/// Build the service configuration.
///
/// Precedence, lowest first: defaults, TOML file, env file, environment
/// (through `lookup`), CLI url.
pub fn load_startup_config<F>(options: &StartupOptions, lookup: F) -> Result<Startup, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    let env_file = match load_env_file(&options.env_file, &mut config) {
        Ok(true) => EnvFileStatus::Loaded,
        Ok(false) => EnvFileStatus::Missing,
        Err(e) => EnvFileStatus::Invalid(e.to_string()),
    };

    apply_env_overrides(&mut config, lookup);

    if let Some(url) = &options.url {
        config.endpoint.url = url.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(Startup { config, env_file })
}
