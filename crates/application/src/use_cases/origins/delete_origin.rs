use origin_relay_domain::{Address, DomainError, RoutingEntry};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::OriginRepository;

pub struct DeleteOriginUseCase {
    origins: Arc<dyn OriginRepository>,
}

impl DeleteOriginUseCase {
    pub fn new(origins: Arc<dyn OriginRepository>) -> Self {
        Self { origins }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, ip: &str) -> Result<RoutingEntry, DomainError> {
        let origin = Address::parse(ip)?;

        let upstream = self
            .origins
            .remove(&origin)
            .ok_or_else(|| DomainError::OriginNotFound(origin.to_string()))?;

        info!(origin = %origin, upstream = %upstream, "Origin route deleted");

        Ok(RoutingEntry::new(origin, upstream))
    }
}
