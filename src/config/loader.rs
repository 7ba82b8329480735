//! Configuration loading from disk and the environment.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::ValidationError;

/// Environment key holding the deployment name.
pub const CONFIG_NAME_KEY: &str = "CONFIG_NAME";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Parse error: {0}")]
    Parse(toml::de::Error),

    #[error("Env file error on line {line}: {reason}")]
    EnvFile { line: usize, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file.
///
/// Validation is left to the caller so that env and CLI overrides can be
/// merged first.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Parse `KEY=VALUE` lines of an environment-style file.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is allowed,
/// and one pair of matching quotes around the value is stripped.
pub fn parse_env_file(content: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let mut pairs = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::EnvFile {
            line: idx + 1,
            reason: "expected KEY=VALUE".to_string(),
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EnvFile {
                line: idx + 1,
                reason: "empty key".to_string(),
            });
        }

        pairs.push((key.to_string(), unquote(value.trim()).to_string()));
    }

    Ok(pairs)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Merge an env file into `config`.
///
/// Returns `Ok(false)` when the file does not exist.
pub fn load_env_file(path: &Path, config: &mut ServiceConfig) -> Result<bool, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ConfigError::Io(e)),
    };

    for (key, value) in parse_env_file(&content)? {
        apply_env_value(config, &key, value);
    }
    Ok(true)
}

/// Override known keys from the environment, looked up through `lookup`.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(CONFIG_NAME_KEY) {
        apply_env_value(config, CONFIG_NAME_KEY, value);
    }
}

fn apply_env_value(config: &mut ServiceConfig, key: &str, value: String) {
    match key {
        CONFIG_NAME_KEY => config.infrastructure.config_name = value,
        other => tracing::debug!(key = other, "Ignoring unknown env key"),
    }
}
