use crate::table::ConcurrentTable;
use origin_relay_application::ports::OriginRepository;
use origin_relay_domain::{Address, RoutingEntry, UpstreamEndpoint};

/// Process-wide origin routing table.
#[derive(Default)]
pub struct InMemoryOriginRepository {
    table: ConcurrentTable<Address, UpstreamEndpoint>,
}

impl InMemoryOriginRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OriginRepository for InMemoryOriginRepository {
    fn upsert(&self, entry: RoutingEntry) -> Option<UpstreamEndpoint> {
        self.table.store(entry.origin, entry.upstream)
    }

    fn get(&self, origin: &Address) -> Option<UpstreamEndpoint> {
        self.table.load(origin)
    }

    fn remove(&self, origin: &Address) -> Option<UpstreamEndpoint> {
        self.table.load_and_delete(origin)
    }

    fn remove_targeting(&self, upstream: &UpstreamEndpoint) -> Vec<RoutingEntry> {
        self.table
            .delete_matching(|_, target| target == upstream)
            .into_iter()
            .map(|(origin, upstream)| RoutingEntry::new(origin, upstream))
            .collect()
    }

    fn list(&self) -> Vec<RoutingEntry> {
        self.table
            .snapshot()
            .into_iter()
            .map(|(origin, upstream)| RoutingEntry::new(origin, upstream))
            .collect()
    }
}
