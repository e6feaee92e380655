pub mod origin_repository;
pub mod upstream_registry;

pub use origin_repository::InMemoryOriginRepository;
pub use upstream_registry::InMemoryUpstreamRegistry;
