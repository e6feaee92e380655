use origin_relay_domain::{DomainError, UpstreamEndpoint};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::UpstreamRegistry;

pub struct RegisterUpstreamUseCase {
    registry: Arc<dyn UpstreamRegistry>,
}

impl RegisterUpstreamUseCase {
    pub fn new(registry: Arc<dyn UpstreamRegistry>) -> Self {
        Self { registry }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, upstream: &str) -> Result<UpstreamEndpoint, DomainError> {
        let upstream = UpstreamEndpoint::parse(upstream)?;
        self.registry.register(upstream);

        info!(upstream = %upstream, "Upstream marked online");

        Ok(upstream)
    }
}
