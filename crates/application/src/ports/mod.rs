mod cache_maintenance_port;
mod origin_repository;
mod response_cache_port;
mod upstream_registry;
mod upstream_transport;

pub use cache_maintenance_port::{CacheMaintenancePort, CacheSweepOutcome};
pub use origin_repository::OriginRepository;
pub use response_cache_port::ResponseCachePort;
pub use upstream_registry::UpstreamRegistry;
pub use upstream_transport::UpstreamTransport;
