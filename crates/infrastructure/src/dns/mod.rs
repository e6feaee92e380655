pub mod cache;
pub mod cache_maintenance;
pub mod forwarding;
pub mod server;
pub mod transport;
pub mod wire;

pub use cache::ResponseCache;
pub use cache_maintenance::ResponseCacheMaintenance;
pub use forwarding::{ForwardingEngine, ForwardingSettings};
pub use server::DnsUdpServer;
pub use transport::UdpUpstreamTransport;
