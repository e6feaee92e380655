use origin_relay_domain::UpstreamEndpoint;
use std::sync::Arc;

use crate::ports::UpstreamRegistry;

pub struct GetUpstreamsUseCase {
    registry: Arc<dyn UpstreamRegistry>,
}

impl GetUpstreamsUseCase {
    pub fn new(registry: Arc<dyn UpstreamRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self) -> Vec<UpstreamEndpoint> {
        let mut upstreams = self.registry.list();
        upstreams.sort();
        upstreams
    }
}
