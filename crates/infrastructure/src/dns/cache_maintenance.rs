use async_trait::async_trait;
use origin_relay_application::ports::{CacheMaintenancePort, CacheSweepOutcome, ResponseCachePort};
use origin_relay_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct ResponseCacheMaintenance {
    cache: Arc<dyn ResponseCachePort>,
}

impl ResponseCacheMaintenance {
    pub fn new(cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for ResponseCacheMaintenance {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        let entries_removed = self.cache.purge_expired();
        let cache_size = self.cache.len();

        debug!(entries_removed, cache_size, "Cache sweep cycle completed");

        Ok(CacheSweepOutcome {
            entries_removed,
            cache_size,
        })
    }
}
