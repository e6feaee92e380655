use crate::{Address, UpstreamEndpoint};

/// One row of the origin routing table: queries from `origin` go to `upstream`.
///
/// The upstream may be absent from the registry; that is a valid state which
/// the forwarding engine treats as "offline".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingEntry {
    pub origin: Address,
    pub upstream: UpstreamEndpoint,
}

impl RoutingEntry {
    pub fn new(origin: Address, upstream: UpstreamEndpoint) -> Self {
        Self { origin, upstream }
    }

    pub fn targets(&self, upstream: &UpstreamEndpoint) -> bool {
        self.upstream == *upstream
    }
}
