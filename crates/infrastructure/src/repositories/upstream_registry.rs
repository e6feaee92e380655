use crate::table::ConcurrentTable;
use origin_relay_application::ports::UpstreamRegistry;
use origin_relay_domain::UpstreamEndpoint;

/// Set of upstreams an operator has marked online.
#[derive(Default)]
pub struct InMemoryUpstreamRegistry {
    table: ConcurrentTable<UpstreamEndpoint, ()>,
}

impl InMemoryUpstreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UpstreamRegistry for InMemoryUpstreamRegistry {
    fn register(&self, upstream: UpstreamEndpoint) {
        self.table.store(upstream, ());
    }

    fn is_online(&self, upstream: &UpstreamEndpoint) -> bool {
        self.table.load(upstream).is_some()
    }

    fn unregister(&self, upstream: &UpstreamEndpoint) -> bool {
        self.table.load_and_delete(upstream).is_some()
    }

    fn list(&self) -> Vec<UpstreamEndpoint> {
        self.table.snapshot().into_keys().collect()
    }
}
