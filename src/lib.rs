//! Process service library: encode a fixed payload, POST it, accept `201 Created`.

pub mod config;
pub mod error;
pub mod http;
pub mod json;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use config::schema::ServiceConfig;
pub use error::{ServiceError, TransportError};
pub use http::{HttpClient, ReqwestClient};
pub use json::{JsonHandler, SerdeJson};
pub use service::{ProcessService, Service};
