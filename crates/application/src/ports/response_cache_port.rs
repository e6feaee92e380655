use bytes::Bytes;
use origin_relay_domain::Fingerprint;

/// TTL-bounded store of packed DNS responses.
pub trait ResponseCachePort: Send + Sync {
    /// Returns the packed response if present and not expired. Reads never extend the expiry.
    fn get(&self, fingerprint: &Fingerprint) -> Option<Bytes>;

    /// Stores (or replaces) a packed response with the cache's fixed TTL.
    fn put(&self, fingerprint: Fingerprint, packed: Bytes);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every expired entry and returns how many were removed.
    fn purge_expired(&self) -> usize;
}
