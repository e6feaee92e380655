use origin_relay_domain::{DomainError, RoutingEntry, UpstreamEndpoint};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{OriginRepository, UpstreamRegistry};

/// What a delete of an upstream actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRemoval {
    pub upstream: UpstreamEndpoint,
    /// The upstream was present in the registry.
    pub registered: bool,
    /// Routes that pointed at the upstream and are now gone, ordered by origin.
    pub removed_origins: Vec<RoutingEntry>,
}

pub struct DeleteUpstreamUseCase {
    registry: Arc<dyn UpstreamRegistry>,
    origins: Arc<dyn OriginRepository>,
}

impl DeleteUpstreamUseCase {
    pub fn new(registry: Arc<dyn UpstreamRegistry>, origins: Arc<dyn OriginRepository>) -> Self {
        Self { registry, origins }
    }

    /// Unregisters the upstream and cascades to every route targeting it.
    ///
    /// Fails with `UpstreamNotFound` only when nothing was removed at all.
    #[instrument(skip(self))]
    pub fn execute(&self, upstream: &str) -> Result<UpstreamRemoval, DomainError> {
        let upstream = UpstreamEndpoint::parse(upstream)?;

        let registered = self.registry.unregister(&upstream);
        let mut removed_origins = self.origins.remove_targeting(&upstream);
        removed_origins.sort_by_key(|e| e.origin);

        if !registered && removed_origins.is_empty() {
            return Err(DomainError::UpstreamNotFound(upstream.to_string()));
        }

        if !removed_origins.is_empty() {
            warn!(
                upstream = %upstream,
                count = removed_origins.len(),
                "Origins left without a route after upstream removal"
            );
        }

        info!(upstream = %upstream, registered, "Upstream deleted");

        Ok(UpstreamRemoval {
            upstream,
            registered,
            removed_origins,
        })
    }
}
