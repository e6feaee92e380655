use origin_relay_domain::RoutingEntry;
use std::sync::Arc;

use crate::ports::OriginRepository;

pub struct GetOriginsUseCase {
    origins: Arc<dyn OriginRepository>,
}

impl GetOriginsUseCase {
    pub fn new(origins: Arc<dyn OriginRepository>) -> Self {
        Self { origins }
    }

    /// Snapshot of the routing table ordered by origin address.
    pub fn execute(&self) -> Vec<RoutingEntry> {
        let mut entries = self.origins.list();
        entries.sort_by_key(|e| e.origin);
        entries
    }
}
