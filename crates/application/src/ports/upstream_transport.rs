use async_trait::async_trait;
use origin_relay_domain::{DomainError, UpstreamEndpoint};
use std::time::Duration;

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Sends one packed query to `upstream` and waits for the matching reply.
    ///
    /// `timeout` bounds the whole exchange; expiry yields
    /// [`DomainError::TransportTimeout`].
    async fn exchange(
        &self,
        upstream: UpstreamEndpoint,
        query: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;
}
