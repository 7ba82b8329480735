//! Transport shutdown on exit.

use std::sync::Arc;

use crate::http::HttpClient;

/// A RAII guard that releases the transport's idle connections when dropped.
///
/// Holding one for the lifetime of `main` makes the release happen on every
/// exit path, including early returns through `?`.
pub struct TransportGuard<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> TransportGuard<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Shared handle to the guarded client.
    pub fn client(&self) -> Arc<C> {
        self.client.clone()
    }
}

impl<C: HttpClient> Drop for TransportGuard<C> {
    fn drop(&mut self) {
        self.client.shutdown();
        tracing::debug!("Transport shut down");
    }
}
