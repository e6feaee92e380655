//! Origin Relay Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod routing;
pub mod upstream;

pub use address::{canonicalize, Address};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use fingerprint::Fingerprint;
pub use routing::RoutingEntry;
pub use upstream::UpstreamEndpoint;
