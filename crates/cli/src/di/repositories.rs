use origin_relay_application::ports::{OriginRepository, UpstreamRegistry};
use origin_relay_infrastructure::repositories::{
    InMemoryOriginRepository, InMemoryUpstreamRegistry,
};
use std::sync::Arc;

pub struct Repositories {
    pub origins: Arc<dyn OriginRepository>,
    pub upstreams: Arc<dyn UpstreamRegistry>,
}

impl Repositories {
    pub fn new() -> Self {
        Self {
            origins: Arc::new(InMemoryOriginRepository::new()),
            upstreams: Arc::new(InMemoryUpstreamRegistry::new()),
        }
    }
}
