//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (parse & deserialize)
//!     → env file (KEY=VALUE) merged on top
//!     → process environment overrides
//!     → CLI overrides
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running with no files at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ServiceConfig;
pub use schema::InfrastructureConfig;
pub use schema::EndpointConfig;
pub use schema::ObservabilityConfig;
