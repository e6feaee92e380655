use super::CacheMetrics;
use bytes::Bytes;
use dashmap::DashMap;
use origin_relay_application::ports::ResponseCachePort;
use origin_relay_domain::Fingerprint;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct CachedResponse {
    packed: Bytes,
    /// `None` when the TTL reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl CachedResponse {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Fixed-TTL response cache.
///
/// Reads never extend an entry's lifetime. Expired entries are removed when a
/// read trips over them and by [`ResponseCache::purge_expired`].
pub struct ResponseCache {
    entries: DashMap<Fingerprint, CachedResponse, FxBuildHasher>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Response cache initialized");
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }
}

impl ResponseCachePort for ResponseCache {
    fn get(&self, fingerprint: &Fingerprint) -> Option<Bytes> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(fingerprint) {
            if !entry.is_expired(now) {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(entry.packed.clone());
            }
        }

        // Drop the read guard before removing; re-check expiry in case a writer
        // replaced the entry in between.
        if self
            .entries
            .remove_if(fingerprint, |_, entry| entry.is_expired(now))
            .is_some()
        {
            self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(fingerprint = %fingerprint, "Expired cache entry evicted on read");
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    fn put(&self, fingerprint: Fingerprint, packed: Bytes) {
        let entry = CachedResponse {
            packed,
            expires_at: Instant::now().checked_add(self.ttl),
        };
        self.entries.insert(fingerprint, entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
        }
        removed
    }
}
