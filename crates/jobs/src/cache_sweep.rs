use origin_relay_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Periodically drops expired response cache entries.
pub struct CacheSweepJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheSweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.maintenance.run_sweep_cycle().await {
                        Ok(outcome) if outcome.entries_removed > 0 => {
                            info!(
                                entries_removed = outcome.entries_removed,
                                cache_size = outcome.cache_size,
                                "Cache sweep cycle completed"
                            );
                        }
                        Ok(outcome) => {
                            debug!(cache_size = outcome.cache_size, "Cache sweep found nothing expired");
                        }
                        Err(e) => {
                            error!(error = %e, "Cache sweep cycle failed");
                        }
                    }
                }
            }
        }
    }
}
