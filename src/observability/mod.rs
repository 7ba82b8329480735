//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main / orchestrator / transport
//!     → tracing events with structured fields (endpoint, status, error)
//!     → run span tagged with a UUID run_id
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
