use origin_relay_domain::{Address, DomainError, RoutingEntry, UpstreamEndpoint};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::OriginRepository;

pub struct UpsertOriginUseCase {
    origins: Arc<dyn OriginRepository>,
}

impl UpsertOriginUseCase {
    pub fn new(origins: Arc<dyn OriginRepository>) -> Self {
        Self { origins }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, ip: &str, upstream: &str) -> Result<RoutingEntry, DomainError> {
        let origin = Address::parse(ip)?;
        let upstream = UpstreamEndpoint::parse(upstream)?;

        let entry = RoutingEntry::new(origin, upstream);
        let previous = self.origins.upsert(entry);

        info!(
            origin = %entry.origin,
            upstream = %entry.upstream,
            previous = ?previous.map(|p| p.to_string()),
            "Origin route stored"
        );

        Ok(entry)
    }
}
