//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     TOML → env file → environment → CLI → validate
//!
//! Shutdown (shutdown.rs):
//!     TransportGuard dropped → idle connections released
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then logging, then transport
//! - Shutdown is tied to scope, not to an explicit call

pub mod shutdown;
pub mod startup;

pub use shutdown::TransportGuard;
pub use startup::{load_startup_config, EnvFileStatus, Startup, StartupOptions};
