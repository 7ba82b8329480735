//! Outbound HTTP transport.
//!
//! # Data Flow
//! ```text
//! orchestrator
//!     → client.rs (HttpClient trait: get / post / shutdown)
//!     → reqwest_client.rs (shared reqwest pool)
//!     → HttpResponse (status + scoped body stream)
//!     → orchestrator reads or drops the body
//! ```

pub mod client;
pub mod reqwest_client;

pub use client::{FixedBody, HttpClient, HttpResponse, ResponseBody};
pub use reqwest_client::ReqwestClient;

/// Content type used for JSON request bodies.
pub const APPLICATION_JSON: &str = "application/json";
