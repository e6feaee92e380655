use async_trait::async_trait;
use origin_relay_domain::DomainError;

/// Outcome of a cache sweep cycle.
#[derive(Debug, Default, Clone)]
pub struct CacheSweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic response cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove expired entries to reclaim memory.
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError>;
}
