use origin_relay_domain::{Address, RoutingEntry, UpstreamEndpoint};

/// Origin → upstream routing table.
///
/// Implementations must be safe to call concurrently from the DNS path and
/// the management API and must never block on I/O.
pub trait OriginRepository: Send + Sync {
    /// Insert or overwrite the route for `entry.origin`; returns the previous target.
    fn upsert(&self, entry: RoutingEntry) -> Option<UpstreamEndpoint>;

    fn get(&self, origin: &Address) -> Option<UpstreamEndpoint>;

    fn remove(&self, origin: &Address) -> Option<UpstreamEndpoint>;

    /// Atomically remove every route pointing at `upstream` and return them.
    fn remove_targeting(&self, upstream: &UpstreamEndpoint) -> Vec<RoutingEntry>;

    fn list(&self) -> Vec<RoutingEntry>;
}
